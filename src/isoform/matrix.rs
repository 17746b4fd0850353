use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ParseError;
use crate::io::read_text;

pub const MISSING_TOKEN: &str = "NA";

/// Per-isoform expression over a fixed tissue list. Missing cells are `None`.
#[derive(Debug, Clone, Default)]
pub struct ExpressionMatrix {
    tissues: Vec<String>,
    rows: HashMap<String, Vec<Option<f64>>>,
    duplicates: usize,
}

impl ExpressionMatrix {
    pub fn tissues(&self) -> &[String] {
        &self.tissues
    }

    pub fn get(&self, id: &str) -> Option<&[Option<f64>]> {
        self.rows.get(id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows dropped because their identifier had already been seen.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Reorders columns to `tissues`. Tissues the matrix does not carry
    /// become all-missing columns and are returned alongside.
    pub fn project(&self, tissues: &[String]) -> (ExpressionMatrix, Vec<String>) {
        let index: HashMap<&str, usize> = self
            .tissues
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();
        let columns: Vec<Option<usize>> = tissues
            .iter()
            .map(|t| index.get(t.as_str()).copied())
            .collect();
        let absent: Vec<String> = tissues
            .iter()
            .zip(&columns)
            .filter(|(_, c)| c.is_none())
            .map(|(t, _)| t.clone())
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|(id, values)| {
                let projected = columns
                    .iter()
                    .map(|c| c.and_then(|i| values[i]))
                    .collect();
                (id.clone(), projected)
            })
            .collect();

        (
            ExpressionMatrix {
                tissues: tissues.to_vec(),
                rows,
                duplicates: self.duplicates,
            },
            absent,
        )
    }
}

pub fn load_expression_matrix(path: &Path) -> Result<ExpressionMatrix> {
    let content = read_text(path)
        .with_context(|| format!("failed to read expression matrix {}", path.display()))?;
    parse_expression_matrix(&content, &path.display().to_string())
}

/// Header `protein <TAB> tissue...`, then one row per isoform. Duplicate
/// identifiers keep the first row.
pub fn parse_expression_matrix(content: &str, source: &str) -> Result<ExpressionMatrix> {
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty());
    let Some((_, header)) = lines.next() else {
        return Err(ParseError::MissingHeader {
            source_name: source.to_string(),
        }
        .into());
    };
    let tissues: Vec<String> = header
        .trim_end_matches(['\r', '\n'])
        .split('\t')
        .skip(1)
        .map(|t| t.trim().to_string())
        .collect();
    let width = tissues.len() + 1;

    let mut rows = HashMap::new();
    let mut duplicates = 0usize;
    for (idx, line) in lines {
        let line_no = idx + 1;
        let parts: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
        if parts.len() != width {
            return Err(ParseError::RowWidth {
                source_name: source.to_string(),
                line: line_no,
                expected: width,
                found: parts.len(),
            }
            .into());
        }
        let id = parts[0].trim();
        let mut values = Vec::with_capacity(tissues.len());
        for (tissue, cell) in tissues.iter().zip(&parts[1..]) {
            values.push(parse_cell(cell, tissue, source, line_no)?);
        }
        if rows.contains_key(id) {
            duplicates += 1;
            continue;
        }
        rows.insert(id.to_string(), values);
    }

    Ok(ExpressionMatrix {
        tissues,
        rows,
        duplicates,
    })
}

fn parse_cell(cell: &str, tissue: &str, source: &str, line_no: usize) -> Result<Option<f64>> {
    let cell = cell.trim();
    if cell.is_empty() || cell == MISSING_TOKEN {
        return Ok(None);
    }
    let value = cell
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::Number {
            source_name: source.to_string(),
            line: line_no,
            column: tissue.to_string(),
            value: cell.to_string(),
        })?;
    Ok(Some(value))
}

pub fn load_tissue_list(path: &Path) -> Result<Vec<String>> {
    let content = read_text(path)
        .with_context(|| format!("failed to read tissue list {}", path.display()))?;
    Ok(parse_tissue_list(&content))
}

/// One tissue name per line; names may contain spaces.
pub fn parse_tissue_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}
