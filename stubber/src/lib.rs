//! # Stubber
//!
//! Generates C++ class declaration stubs from YAML class schemas.
//!
//! A schema names a class, its template parameters, base classes, and the
//! member functions and variables of each visibility. Stubber turns every
//! schema under a directory tree into one normalized header, mirroring the
//! tree into an output root.
//!
//! ## Quick Start
//!
//! ```ignore
//! use stubber::prelude::*;
//!
//! let report = Builder::new(BuildConfig::new("stubs", "source").author("Ada")).run()?;
//! assert!(report.is_clean());
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema records and YAML loading
//! - [`codegen`] - Type resolution, declaration emission and class assembly
//! - [`build`] - Tree discovery and parallel build orchestration
//! - [`cli`] - Command line front end

pub mod cli;
pub mod prelude;

/// Schema records and YAML loading.
pub mod schema {
    pub use stubber_schema::*;
}

/// Class declaration generation.
pub mod codegen {
    pub use stubber_codegen::*;
}

/// Build orchestration over schema trees.
pub mod build {
    pub use stubber_build::*;
}

// Re-export commonly used items at the crate root
pub use stubber_build::{BuildConfig, BuildReport, Builder};
pub use stubber_codegen::{Cpp, GeneratedFile, Generator};
pub use stubber_schema::SchemaRecord;
