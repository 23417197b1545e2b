//! Quote domain errors

use thiserror::Error;

use crate::validation::FieldErrors;

/// Errors that can occur in the quote domain
#[derive(Debug, Error)]
pub enum QuoteError {
    /// One or more fields failed validation
    #[error("Quote validation failed: {0}")]
    Validation(FieldErrors),

    /// Input could not be read as form values at all
    #[error("Invalid form input: {0}")]
    InvalidInput(String),
}

impl QuoteError {
    /// Creates an InvalidInput error with a message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        QuoteError::InvalidInput(message.into())
    }

    /// Returns the field errors if this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            QuoteError::Validation(errors) => Some(errors),
            QuoteError::InvalidInput(_) => None,
        }
    }
}

impl From<FieldErrors> for QuoteError {
    fn from(errors: FieldErrors) -> Self {
        QuoteError::Validation(errors)
    }
}
