use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ParseError;
use crate::io::read_text;

/// Cross-species identifier translation (source namespace -> target namespace).
#[derive(Debug, Clone, Default)]
pub struct HomologMap {
    map: HashMap<String, String>,
}

impl HomologMap {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut map = HashMap::new();
        for (from, to) in pairs {
            map.insert(from.into(), to.into());
        }
        Self { map }
    }

    pub fn translate(&self, id: &str) -> Option<&str> {
        self.map.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// One protein identifier to the ordered list of its isoform identifiers.
#[derive(Debug, Clone, Default)]
pub struct IsoformMap {
    map: HashMap<String, Vec<String>>,
}

impl IsoformMap {
    pub fn isoforms(&self, protein: &str) -> Option<&[String]> {
        self.map.get(protein).map(Vec::as_slice)
    }

    pub fn insert(&mut self, protein: &str, isoform: &str) {
        self.map
            .entry(protein.to_string())
            .or_default()
            .push(isoform.to_string());
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

pub fn load_homolog_map(path: &Path) -> Result<HomologMap> {
    let content = read_text(path)
        .with_context(|| format!("failed to read homolog map {}", path.display()))?;
    parse_homolog_map(&content, &path.display().to_string())
}

/// The first line is a header and is discarded. Later rows win on duplicate
/// source identifiers.
pub fn parse_homolog_map(content: &str, source: &str) -> Result<HomologMap> {
    let mut map = HashMap::new();
    for (from, to) in pairs(content, source, true)? {
        map.insert(from.to_string(), to.to_string());
    }
    Ok(HomologMap { map })
}

pub fn load_isoform_map(path: &Path) -> Result<IsoformMap> {
    let content = read_text(path)
        .with_context(|| format!("failed to read protein map {}", path.display()))?;
    parse_isoform_map(&content, &path.display().to_string())
}

pub fn parse_isoform_map(content: &str, source: &str) -> Result<IsoformMap> {
    let mut out = IsoformMap::default();
    for (protein, isoform) in pairs(content, source, false)? {
        out.insert(protein, isoform);
    }
    Ok(out)
}

fn pairs<'a>(
    content: &'a str,
    source: &str,
    skip_header: bool,
) -> Result<Vec<(&'a str, &'a str)>> {
    let skip = usize::from(skip_header);
    let mut out = Vec::new();
    for (idx, line) in content.lines().enumerate().skip(skip) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        if parts.len() < 2 {
            return Err(ParseError::FieldCount {
                source_name: source.to_string(),
                line: idx + 1,
                expected: 2,
                found: parts.len(),
            }
            .into());
        }
        out.push((parts[0], parts[1]));
    }
    Ok(out)
}
