//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema parse error: {0}")]
    Parse(#[from] stubber_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] stubber_schema::SchemaError),
}

impl CodegenError {
    /// Returns true if the record was rejected for a missing required field.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::Schema(e) if e.is_missing_field())
    }
}
