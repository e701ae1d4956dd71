//! Errores específicos del matching (simples por ahora).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("candidate style '{candidate}' does not match spec style '{spec}'")]
    InvalidStyle { candidate: String, spec: String },
    #[error("candidate record is missing required field '{field}'")]
    MissingField { field: String },
    #[error("no match spec registered for style '{style}'")]
    UnknownStyle { style: String },
    #[error("field '{field}' is declared in more than one key group")]
    OverlappingKey { field: String },
    #[error("a match spec for style '{style}' is already registered")]
    DuplicateStyle { style: String },
}
