use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;

use anyhow::Result;
use flate2::read::GzDecoder;

pub mod json_writer;
pub mod summary;
pub mod tsv_writer;

pub(crate) fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(decoder))
    } else {
        Ok(Box::new(file))
    }
}

/// Whole-file read, transparently decompressing `.gz` inputs.
pub fn read_text(path: &Path) -> Result<String> {
    let mut reader = open_maybe_gz(path)?;
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

pub(crate) fn buffered_create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
