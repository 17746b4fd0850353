use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;
use crate::io::buffered_create;
use crate::isoform::MISSING_TOKEN;

pub const COMPLEX_HEADER: &str = "complex_id\tn_ned\tn_ed\tmean_ned\tmean_ed\tverdict";

pub fn write_complex_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let run = ctx
        .enrichment
        .as_ref()
        .context("enrichment results missing")?;
    let mut w = buffered_create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writeln!(w, "{}", COMPLEX_HEADER)?;
    for c in &run.comparisons {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}",
            c.complex_id,
            c.n_ned,
            c.n_ed,
            format_opt(c.mean_ned),
            format_opt(c.mean_ed),
            c.verdict
        )?;
    }
    w.flush()?;
    Ok(())
}

/// `prot <TAB> tissues... <TAB> tcount <TAB> def`, readable back as a
/// tissue table.
pub fn write_isoform_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let mut w = buffered_create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writeln!(w, "prot\t{}\ttcount\tdef", ctx.tissues.join("\t"))?;
    for row in &ctx.isoform_rows {
        if row.vector.values.len() != ctx.tissues.len() {
            bail!(
                "expression vector for {} has {} values for {} tissues",
                row.protein,
                row.vector.values.len(),
                ctx.tissues.len()
            );
        }
        let values: Vec<String> = row.vector.values.iter().map(|v| format_opt(*v)).collect();
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            row.protein,
            values.join("\t"),
            row.tissue_count(),
            row.description
        )?;
    }
    w.flush()?;
    Ok(())
}

fn format_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => MISSING_TOKEN.to_string(),
    }
}
