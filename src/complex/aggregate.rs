use crate::complex::{ComplexStructure, resolve};
use crate::proteins::{DecayClass, ProteinTable};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationResult {
    pub ned_values: Vec<f64>,
    pub ed_values: Vec<f64>,
}

impl AggregationResult {
    pub fn is_comparable(&self) -> bool {
        !self.ned_values.is_empty() && !self.ed_values.is_empty()
    }
}

pub fn aggregate(complex: &ComplexStructure, table: &ProteinTable) -> AggregationResult {
    let mut out = AggregationResult::default();
    // No dedup: a protein filling two positions is counted twice.
    for group in &complex.subunits {
        let Some(resolved) = resolve(group, table) else {
            continue;
        };
        match resolved.decay {
            DecayClass::Ned => out.ned_values.push(resolved.value),
            DecayClass::Ed => out.ed_values.push(resolved.value),
            DecayClass::Unclassified => {}
        }
    }
    out
}
