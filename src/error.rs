//! Typed errors raised at the form's string-keyed boundary

use thiserror::Error;

/// Errors for input the form cannot map onto its schema.
///
/// Field validation failures are not errors; they are collected as
/// [`FormErrors`](crate::state::FormErrors) data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A change event named a field the form does not have
    #[error("unknown form field: {0:?}")]
    UnknownField(String),

    /// A gender value outside the select's options
    #[error("unknown gender option: {0:?}")]
    UnknownGender(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
