//! Error types for build orchestration.

use std::path::PathBuf;
use stubber_codegen::CodegenError;
use thiserror::Error;

/// Fatal errors that stop a build run.
///
/// Per-schema problems are not fatal; they are collected as
/// [`crate::Rejection`]s in the build report.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The schema root does not exist or is not a directory.
    #[error("schema root '{}' is not a directory", root.display())]
    SchemaRootNotFound {
        /// Configured schema root.
        root: PathBuf,
    },

    /// Discovery found no schema files.
    #[error("no '*.{extension}' schema files found under '{}'", root.display())]
    NothingToBuild {
        /// Configured schema root.
        root: PathBuf,
        /// Schema file extension searched for.
        extension: String,
    },

    /// Directory traversal failed.
    #[error("failed to walk '{}': {source}", root.display())]
    Walk {
        /// Configured schema root.
        root: PathBuf,
        /// Underlying traversal error.
        source: walkdir::Error,
    },

    /// An output directory could not be created.
    #[error("failed to create directory '{}': {source}", path.display())]
    CreateDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A generated file could not be written.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// File path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl BuildError {
    /// Creates a directory creation error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Creates a write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Why a single schema produced no artifact.
#[derive(Debug, Error)]
pub enum RejectionReason {
    /// Loading or generation failed.
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    /// An earlier schema in the same run already claimed the artifact path.
    #[error("'{}' is already generated from '{}'", path.display(), first.display())]
    DuplicateArtifact {
        /// Contested artifact path.
        path: PathBuf,
        /// Schema that was kept.
        first: PathBuf,
    },
}

impl RejectionReason {
    /// Returns true if the schema lacked a required field.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::Codegen(e) if e.is_missing_field())
    }

    /// Returns true if the artifact path was already taken.
    #[must_use]
    pub fn is_duplicate_artifact(&self) -> bool {
        matches!(self, Self::DuplicateArtifact { .. })
    }
}
