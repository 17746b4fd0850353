use std::collections::HashMap;
use std::path::PathBuf;

use crate::complex::ComplexStructure;
use crate::enrich::{EnrichmentRun, MetricKind};
use crate::isoform::RepresentativeRow;
use crate::proteins::{HomologMap, IsoformMap, ProteinRecord};
use crate::schema::v1::HalflifeV1;

#[derive(Debug, Clone)]
pub struct EnrichSettings {
    pub complexes_path: PathBuf,
    pub organism: String,
    pub metric: MetricKind,
    pub homologs_path: Option<PathBuf>,
    pub tissue_table_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct IsoformSettings {
    pub expression_path: PathBuf,
    pub fallback_expression_path: Option<PathBuf>,
    pub protein_map_path: Option<PathBuf>,
    pub tissues_path: Option<PathBuf>,
    pub skip_tissues: Vec<String>,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ValidateSettings {
    pub complexes_path: Option<PathBuf>,
    pub homologs_path: Option<PathBuf>,
    pub organism: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Task {
    Enrich(EnrichSettings),
    Isoforms(IsoformSettings),
    Validate(ValidateSettings),
}

impl Task {
    pub fn homologs_path(&self) -> Option<&PathBuf> {
        match self {
            Task::Enrich(s) => s.homologs_path.as_ref(),
            Task::Validate(s) => s.homologs_path.as_ref(),
            Task::Isoforms(_) => None,
        }
    }

    pub fn complexes_path(&self) -> Option<&PathBuf> {
        match self {
            Task::Enrich(s) => Some(&s.complexes_path),
            Task::Validate(s) => s.complexes_path.as_ref(),
            Task::Isoforms(_) => None,
        }
    }

    pub fn organism(&self) -> Option<&str> {
        match self {
            Task::Enrich(s) => Some(s.organism.as_str()),
            Task::Validate(s) => s.organism.as_deref(),
            Task::Isoforms(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub ned_path: PathBuf,
    pub task: Task,
    pub write_json: bool,
    pub write_tsv: bool,
    pub threads: usize,
    pub records: Vec<ProteinRecord>,
    pub homologs: Option<HomologMap>,
    pub tissue_counts: Option<HashMap<String, u32>>,
    pub isoform_map: Option<IsoformMap>,
    pub complexes: Vec<ComplexStructure>,
    pub complexes_in_file: usize,
    pub enrichment: Option<EnrichmentRun>,
    pub tissues: Vec<String>,
    pub isoform_rows: Vec<RepresentativeRow>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: HalflifeV1,
}

impl Ctx {
    pub fn new(
        ned_path: PathBuf,
        task: Task,
        out_dir: PathBuf,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("enrichment.json");
        let tsv_path = out_dir.join("complexes.tsv");
        let report = HalflifeV1::empty(tool_version, 0);
        Self {
            ned_path,
            task,
            write_json,
            write_tsv,
            threads: 0,
            records: Vec::new(),
            homologs: None,
            tissue_counts: None,
            isoform_map: None,
            complexes: Vec::new(),
            complexes_in_file: 0,
            enrichment: None,
            tissues: Vec::new(),
            isoform_rows: Vec::new(),
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
            report,
        }
    }

    pub fn writes_reports(&self) -> bool {
        matches!(self.task, Task::Enrich(_)) && (self.write_json || self.write_tsv)
    }
}
