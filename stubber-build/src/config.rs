//! Build configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use stubber_codegen::{Cpp, TargetLanguage};

/// Default extension of schema files, without the dot.
pub const DEFAULT_SCHEMA_EXTENSION: &str = "yaml";

/// Configuration for one build run.
///
/// Roots are carried here and passed down explicitly; nothing about a run
/// is kept in global state.
pub struct BuildConfig {
    schema_root: PathBuf,
    output_root: PathBuf,
    schema_extension: String,
    author: Option<String>,
    target: Box<dyn TargetLanguage>,
}

impl BuildConfig {
    /// Creates a configuration with the C++ target and `yaml` schemas.
    #[must_use]
    pub fn new(schema_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            schema_root: schema_root.into(),
            output_root: output_root.into(),
            schema_extension: DEFAULT_SCHEMA_EXTENSION.to_string(),
            author: None,
            target: Box::new(Cpp::new()),
        }
    }

    /// Sets the schema file extension. A leading dot is ignored.
    #[must_use]
    pub fn schema_extension(mut self, extension: &str) -> Self {
        self.schema_extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Sets the author shown in generated banners.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the target language.
    #[must_use]
    pub fn target(mut self, target: impl TargetLanguage + 'static) -> Self {
        self.target = Box::new(target);
        self
    }

    /// Returns the schema root.
    #[must_use]
    pub fn schema_root(&self) -> &Path {
        &self.schema_root
    }

    /// Returns the output root.
    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Returns the schema file extension, without the dot.
    #[must_use]
    pub fn schema_ext(&self) -> &str {
        &self.schema_extension
    }

    /// Returns the banner author, if any.
    #[must_use]
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Returns the target language.
    #[must_use]
    pub fn target_language(&self) -> &dyn TargetLanguage {
        self.target.as_ref()
    }
}

impl fmt::Debug for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildConfig")
            .field("schema_root", &self.schema_root)
            .field("output_root", &self.output_root)
            .field("schema_extension", &self.schema_extension)
            .field("author", &self.author)
            .field("target", &self.target.name())
            .finish()
    }
}
