// File: src/error.rs
// Purpose: Error types for the form controller

use thiserror::Error;

use crate::field::Field;

/// Errors raised by the host-facing entry points
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// Reasons a submission is refused
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// A required field is empty or was never filled in
    #[error("Please fill in the {0} field!")]
    MissingField(Field),

    /// Every required field is filled, but some fields fail their rule
    #[error("There are errors in the form.")]
    InvalidFields(Vec<Field>),
}
