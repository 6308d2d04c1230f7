//! # Stubber Build
//!
//! Drives generation over a tree of schema files.
//!
//! This crate provides:
//! - Recursive schema discovery grouped by directory
//! - Mirroring of the schema tree into the output root
//! - Parallel per-schema generation and writing
//! - Rejection of schemas whose artifact path is already taken
//! - A [`BuildReport`] of written artifacts and rejected schemas

pub mod builder;
pub mod config;
pub mod discovery;
pub mod error;

pub use builder::{BuildReport, Builder, Rejection};
pub use config::{BuildConfig, DEFAULT_SCHEMA_EXTENSION};
pub use discovery::{BuildUnit, discover, mirror_directories};
pub use error::{BuildError, RejectionReason};

/// Runs a build with the given configuration.
///
/// # Errors
/// Returns `BuildError` on any fatal failure; see [`Builder::run`].
pub fn build(config: BuildConfig) -> Result<BuildReport, BuildError> {
    Builder::new(config).run()
}
