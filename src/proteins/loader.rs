use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ParseError;
use crate::io::read_text;
use crate::proteins::{DecayClass, ProteinRecord};

const NED_MIN_FIELDS: usize = 4;
const TISSUE_MIN_FIELDS: usize = 3;

pub fn load_ned_table(path: &Path) -> Result<Vec<ProteinRecord>> {
    let content = read_text(path)
        .with_context(|| format!("failed to read NED table {}", path.display()))?;
    parse_ned_table(&content, &path.display().to_string())
}

/// Rows are addressed from the end: abundance, decay class, protein id and
/// description are always the last four fields, whatever precedes them.
pub fn parse_ned_table(content: &str, source: &str) -> Result<Vec<ProteinRecord>> {
    let mut lines = content.lines().enumerate();
    if lines.next().is_none() {
        return Err(ParseError::MissingHeader {
            source_name: source.to_string(),
        }
        .into());
    }

    let mut records = Vec::new();
    for (idx, line) in lines {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let parts = split_fields(line);
        if parts.len() < NED_MIN_FIELDS {
            return Err(ParseError::FieldCount {
                source_name: source.to_string(),
                line: line_no,
                expected: NED_MIN_FIELDS,
                found: parts.len(),
            }
            .into());
        }
        let n = parts.len();
        let abundance_str = parts[n - 4];
        let abundance = abundance_str
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::Number {
                source_name: source.to_string(),
                line: line_no,
                column: "abundance".to_string(),
                value: abundance_str.to_string(),
            })?;
        records.push(ProteinRecord {
            id: parts[n - 2].to_string(),
            abundance,
            decay: DecayClass::from_token(parts[n - 3]),
            description: parts[n - 1].to_string(),
        });
    }

    Ok(records)
}

/// Tab-delimited rows keep spaces inside fields; other rows split on any
/// whitespace.
fn split_fields(line: &str) -> Vec<&str> {
    if line.contains('\t') {
        line.split('\t').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    }
}

pub fn load_tissue_counts(path: &Path) -> Result<HashMap<String, u32>> {
    let content = read_text(path)
        .with_context(|| format!("failed to read tissue table {}", path.display()))?;
    parse_tissue_counts(&content, &path.display().to_string())
}

/// Reads the `prot ... tcount def` table written by the isoform command.
pub fn parse_tissue_counts(content: &str, source: &str) -> Result<HashMap<String, u32>> {
    let mut lines = content.lines().enumerate();
    if lines.next().is_none() {
        return Err(ParseError::MissingHeader {
            source_name: source.to_string(),
        }
        .into());
    }

    let mut counts = HashMap::new();
    for (idx, line) in lines {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() < TISSUE_MIN_FIELDS {
            return Err(ParseError::FieldCount {
                source_name: source.to_string(),
                line: line_no,
                expected: TISSUE_MIN_FIELDS,
                found: parts.len(),
            }
            .into());
        }
        let tcount_str = parts[parts.len() - 2].trim();
        let tcount: u32 = tcount_str.parse().map_err(|_| ParseError::Number {
            source_name: source.to_string(),
            line: line_no,
            column: "tcount".to_string(),
            value: tcount_str.to_string(),
        })?;
        counts.insert(parts[0].trim().to_string(), tcount);
    }

    Ok(counts)
}
