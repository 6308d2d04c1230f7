//! Per-record generation entry point.

use crate::assembler::ClassAssembler;
use crate::error::CodegenError;
use crate::naming::to_file_identifier;
use crate::normalize::normalize;
use crate::target::TargetLanguage;
use stubber_schema::SchemaRecord;

/// A finished artifact, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name including the target extension.
    pub file_name: String,
    /// Normalized document text.
    pub contents: String,
}

/// Main code generator: one schema record in, one normalized file out.
pub struct Generator<'a> {
    target: &'a dyn TargetLanguage,
    author: Option<&'a str>,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for a target.
    #[must_use]
    pub fn new(target: &'a dyn TargetLanguage) -> Self {
        Self {
            target,
            author: None,
        }
    }

    /// Sets the author shown in generated banners.
    #[must_use]
    pub fn with_author(mut self, author: Option<&'a str>) -> Self {
        self.author = author;
        self
    }

    /// Generates the file for one record.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if the record is rejected.
    pub fn generate(&self, record: &SchemaRecord) -> Result<GeneratedFile, CodegenError> {
        let document = ClassAssembler::new(self.target)
            .with_author(self.author)
            .assemble(record)?;

        Ok(GeneratedFile {
            file_name: self.file_name(&record.name),
            contents: normalize(&document),
        })
    }

    /// Returns the artifact file name for a class name.
    #[must_use]
    pub fn file_name(&self, class_name: &str) -> String {
        format!(
            "{}{}",
            to_file_identifier(class_name),
            self.target.file_extension()
        )
    }
}
