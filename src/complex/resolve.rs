use crate::complex::SubunitGroup;
use crate::proteins::{DecayClass, ProteinTable};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSubunit {
    pub id: String,
    pub value: f64,
    pub decay: DecayClass,
}

/// First candidate, in group order, that is present in the table with an NED
/// or ED class. Later candidates are never consulted once one resolves, even
/// if their values differ.
pub fn resolve(group: &SubunitGroup, table: &ProteinTable) -> Option<ResolvedSubunit> {
    group.candidates().iter().find_map(|id| {
        table
            .lookup(id)
            .filter(|entry| entry.decay.is_classified())
            .map(|entry| ResolvedSubunit {
                id: id.clone(),
                value: entry.value,
                decay: entry.decay,
            })
    })
}
