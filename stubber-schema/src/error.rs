//! Error types for schema loading and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for schema loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML decoding error.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML decoding error with the offending file.
    #[error("YAML parsing error in '{}': {source}", path.display())]
    YamlFile {
        /// Schema file path.
        path: PathBuf,
        /// Underlying decoder error.
        source: serde_yaml::Error,
    },

    /// IO error while reading a schema file.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// Schema file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document decoded to something other than a mapping.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },
}

/// Error type for record validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A required field is absent or empty.
    #[error("missing required field '{field}'")]
    MissingField {
        /// Field name.
        field: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates an IO error bound to a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a YAML error bound to a path.
    pub fn yaml_file(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::YamlFile {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Returns true if this error rejects a record for a missing field.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}
