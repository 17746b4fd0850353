mod matrix;
mod select;

pub use matrix::{
    ExpressionMatrix, MISSING_TOKEN, load_expression_matrix, load_tissue_list,
    parse_expression_matrix, parse_tissue_list,
};
pub use select::{IsoformSelector, select_representative};

#[derive(Debug, Clone, PartialEq)]
pub struct IsoformExpressionVector {
    pub id: String,
    pub values: Vec<Option<f64>>,
}

impl IsoformExpressionVector {
    pub fn new(id: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// Tissue count reported for the protein this vector represents.
    pub fn present_count(&self) -> usize {
        self.values.len() - self.missing_count()
    }

    pub fn is_all_missing(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    pub fn present_mean(&self) -> Option<f64> {
        let present: Vec<f64> = self.values.iter().flatten().copied().collect();
        crate::math::stats::mean(&present)
    }
}

/// One output row of the isoform command.
#[derive(Debug, Clone, PartialEq)]
pub struct RepresentativeRow {
    pub protein: String,
    pub vector: IsoformExpressionVector,
    pub description: String,
}

impl RepresentativeRow {
    pub fn tissue_count(&self) -> usize {
        self.vector.present_count()
    }
}
