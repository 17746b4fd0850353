//! Typed load errors.
//!
//! Everything else in the crate travels as `anyhow::Error`; a malformed table
//! row is kept as a concrete type so callers can tell a structural failure
//! apart from an I/O failure with `downcast_ref::<ParseError>()`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{source_name}:{line} malformed row (expected at least {expected} fields, found {found})")]
    FieldCount {
        source_name: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{source_name}:{line} row width {found} does not match header width {expected}")]
    RowWidth {
        source_name: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{source_name}:{line} invalid number '{value}' in column '{column}'")]
    Number {
        source_name: String,
        line: usize,
        column: String,
        value: String,
    },

    #[error("{source_name}:{line} {detail}")]
    Syntax {
        source_name: String,
        line: usize,
        detail: String,
    },

    #[error("{source_name} is empty (expected a header line)")]
    MissingHeader { source_name: String },
}

impl ParseError {
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::FieldCount { line, .. }
            | ParseError::RowWidth { line, .. }
            | ParseError::Number { line, .. }
            | ParseError::Syntax { line, .. } => Some(*line),
            ParseError::MissingHeader { .. } => None,
        }
    }
}
