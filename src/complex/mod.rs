mod aggregate;
mod loader;
mod resolve;

pub use aggregate::{AggregationResult, aggregate};
pub use loader::{load_complexes, parse_complexes, parse_subunits};
pub use resolve::{ResolvedSubunit, resolve};

/// Alternative identifications for one structural position, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubunitGroup {
    candidates: Vec<String>,
}

impl SubunitGroup {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn single(id: impl Into<String>) -> Self {
        Self {
            candidates: vec![id.into()],
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexStructure {
    pub id: String,
    pub organism: String,
    pub name: Option<String>,
    pub subunits: Vec<SubunitGroup>,
}

impl ComplexStructure {
    pub fn new(id: impl Into<String>, subunits: Vec<SubunitGroup>) -> Self {
        Self {
            id: id.into(),
            organism: String::new(),
            name: None,
            subunits,
        }
    }
}

pub fn filter_organism(complexes: Vec<ComplexStructure>, organism: &str) -> Vec<ComplexStructure> {
    complexes
        .into_iter()
        .filter(|c| c.organism.eq_ignore_ascii_case(organism))
        .collect()
}
