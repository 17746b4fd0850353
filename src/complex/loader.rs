use std::path::Path;

use anyhow::{Context, Result};

use crate::complex::{ComplexStructure, SubunitGroup};
use crate::error::ParseError;
use crate::io::read_text;

const COMPLEX_MIN_FIELDS: usize = 3;

pub fn load_complexes(path: &Path) -> Result<Vec<ComplexStructure>> {
    let content = read_text(path)
        .with_context(|| format!("failed to read complex database {}", path.display()))?;
    parse_complexes(&content, &path.display().to_string())
}

/// `complex_id <TAB> organism <TAB> subunits [<TAB> name]`, `#` lines are
/// comments. Complex order follows the file.
pub fn parse_complexes(content: &str, source: &str) -> Result<Vec<ComplexStructure>> {
    let mut complexes = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() < COMPLEX_MIN_FIELDS {
            return Err(ParseError::FieldCount {
                source_name: source.to_string(),
                line: line_no,
                expected: COMPLEX_MIN_FIELDS,
                found: parts.len(),
            }
            .into());
        }
        let id = parts[0].trim();
        if id.is_empty() {
            return Err(ParseError::Syntax {
                source_name: source.to_string(),
                line: line_no,
                detail: "empty complex id".to_string(),
            }
            .into());
        }
        let name = parts
            .get(3)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        complexes.push(ComplexStructure {
            id: id.to_string(),
            organism: parts[1].trim().to_string(),
            name,
            subunits: parse_subunits(parts[2], source, line_no)?,
        });
    }
    Ok(complexes)
}

/// Positions are `;`-separated. A position is either a bare identifier or a
/// bracketed group of alternatives: `P1;[P2,P3];(P4 P5)`.
pub fn parse_subunits(field: &str, source: &str, line_no: usize) -> Result<Vec<SubunitGroup>> {
    let syntax = |detail: String| ParseError::Syntax {
        source_name: source.to_string(),
        line: line_no,
        detail,
    };

    let mut groups = Vec::new();
    for token in field.split(';') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let inner = match (token.chars().next(), token.chars().last()) {
            (Some('['), Some(']')) | (Some('('), Some(')')) => &token[1..token.len() - 1],
            _ => {
                if token.contains(['[', ']', '(', ')']) {
                    return Err(syntax(format!("unbalanced subunit group '{}'", token)).into());
                }
                groups.push(SubunitGroup::single(token));
                continue;
            }
        };
        if inner.contains(['[', ']', '(', ')']) {
            return Err(syntax(format!("nested subunit group '{}'", token)).into());
        }
        let candidates: Vec<&str> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        if candidates.is_empty() {
            return Err(syntax(format!("empty subunit group '{}'", token)).into());
        }
        groups.push(SubunitGroup::new(candidates));
    }
    Ok(groups)
}
