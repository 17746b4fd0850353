mod homolog;
mod loader;
mod table;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use homolog::{
    HomologMap, IsoformMap, load_homolog_map, load_isoform_map, parse_homolog_map,
    parse_isoform_map,
};
pub use loader::{load_ned_table, load_tissue_counts, parse_ned_table, parse_tissue_counts};
pub use table::{ProteinEntry, ProteinTable, TableStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayClass {
    Ned,
    Ed,
    Unclassified,
}

impl DecayClass {
    /// Only the literal tokens `NED` and `ED` classify a protein.
    pub fn from_token(token: &str) -> Self {
        match token {
            "NED" => DecayClass::Ned,
            "ED" => DecayClass::Ed,
            _ => DecayClass::Unclassified,
        }
    }

    pub fn is_classified(self) -> bool {
        !matches!(self, DecayClass::Unclassified)
    }
}

impl fmt::Display for DecayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecayClass::Ned => "NED",
            DecayClass::Ed => "ED",
            DecayClass::Unclassified => "unclassified",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProteinRecord {
    pub id: String,
    pub abundance: f64,
    pub decay: DecayClass,
    pub description: String,
}
