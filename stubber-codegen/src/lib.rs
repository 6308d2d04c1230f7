//! # Stubber Codegen
//!
//! Class declaration generation from schema records.
//!
//! This crate provides:
//! - Type expression resolution (`List of ptr-Node` to `std::vector< Node* >`)
//! - Member, function and visibility section generation
//! - Whole-class document assembly and whitespace normalization
//! - The [`TargetLanguage`] seam with a C++ implementation

pub mod assembler;
pub mod cpp;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod naming;
pub mod normalize;
pub mod resolver;
pub mod target;

pub use assembler::ClassAssembler;
pub use cpp::Cpp;
pub use emitter::{DeclarationEmitter, SectionKind};
pub use error::CodegenError;
pub use generator::{GeneratedFile, Generator};
pub use naming::to_file_identifier;
pub use normalize::normalize;
pub use resolver::TypeResolver;
pub use target::{ClassLayout, ClassSections, TargetLanguage};

/// Generates a C++ declaration from a YAML schema string.
///
/// # Arguments
/// * `yaml` - YAML schema content
///
/// # Returns
/// The generated file name and normalized contents.
///
/// # Errors
/// Returns `CodegenError` if parsing fails or the record is rejected.
pub fn generate_from_yaml(yaml: &str) -> Result<GeneratedFile, CodegenError> {
    let record = stubber_schema::parse_schema(yaml)?;
    Generator::new(&Cpp::new()).generate(&record)
}

/// Generates a C++ declaration from a YAML schema file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<GeneratedFile, CodegenError> {
    let record = stubber_schema::parse_schema_file(path)?;
    Generator::new(&Cpp::new()).generate(&record)
}
