//! Error types for the body metrics calculator

use thiserror::Error;

use crate::validation::Field;

/// Reasons a calculation request is declined
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{}: a value is required", .field.label())]
    Missing { field: Field },

    #[error("{}: '{value}' is not a number", .field.label())]
    NotANumber { field: Field, value: String },

    #[error("{}: must be at least {min}, got {value}", .field.label())]
    OutOfRange { field: Field, value: f64, min: f64 },

    #[error("Unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },
}

impl InputError {
    /// The numeric field the error refers to, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            InputError::Missing { field }
            | InputError::NotANumber { field, .. }
            | InputError::OutOfRange { field, .. } => Some(*field),
            InputError::UnknownOption { .. } => None,
        }
    }
}
