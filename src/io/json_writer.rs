use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::io::buffered_create;
use crate::schema::v1::HalflifeV1;

pub fn write_json(path: &Path, report: &HalflifeV1) -> Result<()> {
    let mut writer = buffered_create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
