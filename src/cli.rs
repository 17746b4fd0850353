use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::enrich::MetricKind;

#[derive(Debug, Parser)]
#[command(
    name = "kira-halflife",
    version,
    about = "NED vs ED decay-class enrichment across protein complexes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Enrich(EnrichArgs),
    Isoforms(IsoformArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct EnrichArgs {
    #[arg(long, help = "NED metric table (abundance, decay class, protein id, description)")]
    pub ned: PathBuf,

    #[arg(long, help = "Complex database TSV (id, organism, subunits[, name])")]
    pub complexes: PathBuf,

    #[arg(long, help = "Organism whose complexes are tested (e.g. human)")]
    pub organism: String,

    #[arg(long, value_enum, default_value_t = MetricArg::Abundance)]
    pub metric: MetricArg,

    #[arg(long, help = "Homolog map translating NED table ids into the complex namespace")]
    pub homologs: Option<PathBuf>,

    #[arg(long, help = "Tissue table written by `isoforms` (required for tissue-count)")]
    pub tissue_table: Option<PathBuf>,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = 0, help = "Number of threads (0 = auto)")]
    pub threads: usize,
}

#[derive(Debug, Args)]
pub struct IsoformArgs {
    #[arg(long, help = "NED metric table listing the proteins to report")]
    pub ned: PathBuf,

    #[arg(long, help = "Isoform expression matrix TSV (protein, tissue columns)")]
    pub expression: PathBuf,

    #[arg(long, help = "Matrix consulted when the primary one has no usable isoform")]
    pub fallback_expression: Option<PathBuf>,

    #[arg(long, help = "Protein -> isoform id map (two columns, one-to-many)")]
    pub protein_map: Option<PathBuf>,

    #[arg(long, help = "File listing the tissues to report, one per line")]
    pub tissues: Option<PathBuf>,

    #[arg(long = "skip-tissue", help = "Tissue to drop (repeatable)")]
    pub skip_tissue: Vec<String>,

    #[arg(long)]
    pub output: PathBuf,

    #[arg(long, default_value_t = 0, help = "Number of threads (0 = auto)")]
    pub threads: usize,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long)]
    pub ned: PathBuf,

    #[arg(long)]
    pub complexes: Option<PathBuf>,

    #[arg(long)]
    pub homologs: Option<PathBuf>,

    #[arg(long)]
    pub organism: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    Abundance,
    LogAbundance,
    TissueCount,
}

impl From<MetricArg> for MetricKind {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Abundance => MetricKind::Abundance,
            MetricArg::LogAbundance => MetricKind::LogAbundance,
            MetricArg::TissueCount => MetricKind::TissueCount,
        }
    }
}
