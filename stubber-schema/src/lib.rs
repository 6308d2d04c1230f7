//! # Stubber Schema
//!
//! Class schema records and their YAML loader.
//!
//! This crate provides:
//! - The [`SchemaRecord`] data model describing one class
//! - YAML parsing from strings and files
//! - Record validation before code generation

pub mod error;
pub mod parser;
pub mod record;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::{parse_schema, parse_schema_file};
pub use record::{
    FunctionSpec, OrderedMap, Scalar, SchemaRecord, TemplateParam, Visibility, VisibilityGroups,
};
pub use validation::validate_record;
