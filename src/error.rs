
use thiserror::Error;

use crate::datatype::ValueKind;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Unknown column '{column}' referenced by clause {clause}")]
    UnknownColumn { clause: usize, column: String },
    #[error("Clause {clause}: cannot coerce '{value}' to {kind} for column '{column}'")]
    TypeCoercion {
        clause: usize,
        column: String,
        kind: ValueKind,
        value: String,
    },
    #[error("Translation error: {0}")]
    Translation(String),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
