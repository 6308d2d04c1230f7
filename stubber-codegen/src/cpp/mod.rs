//! C++ target.
//!
//! Emits header-style class declarations with include guards.

pub mod layout;

use crate::target::{ClassLayout, TargetLanguage};

/// Default extension of generated C++ files.
pub const DEFAULT_EXTENSION: &str = ".hpp";

/// Reference and pointer decorations keyed by modifier.
const MODIFIERS: &[(&str, &str)] = &[
    ("ref", "&"),
    ("ptr", "*"),
    ("refptr", "&*"),
    ("ptrref", "*&"),
    ("ptrptr", "**"),
    ("ptrptrptr", "***"),
];

/// Container aliases and their standard library patterns.
const CONTAINERS: &[(&str, &str)] = &[
    ("List", "std::vector< {} >"),
    ("Map", "std::map< {}, {} >"),
    ("Set", "std::set< {} >"),
    ("Pair", "std::pair< {}, {} >"),
];

/// The C++ target language.
#[derive(Debug, Clone)]
pub struct Cpp {
    extension: String,
}

impl Cpp {
    /// Creates the target with the default `.hpp` extension.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Overrides the output file extension. A missing leading dot is added.
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = if extension.starts_with('.') || extension.is_empty() {
            extension.to_string()
        } else {
            format!(".{extension}")
        };
        self
    }
}

impl Default for Cpp {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetLanguage for Cpp {
    fn name(&self) -> &'static str {
        "c++"
    }

    fn file_extension(&self) -> &str {
        &self.extension
    }

    fn modifier(&self, key: &str) -> Option<&'static str> {
        MODIFIERS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, decoration)| *decoration)
    }

    fn container(&self, name: &str) -> Option<&'static str> {
        CONTAINERS
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, pattern)| *pattern)
    }

    fn generic_template(&self, name: &str, args: &[String]) -> String {
        format!("{}< {} >", name, args.join(", "))
    }

    fn void_type(&self) -> &'static str {
        "void"
    }

    fn member_prefix(&self) -> &'static str {
        "m_"
    }

    fn include_line(&self, header: &str) -> String {
        if header.starts_with('"') || header.starts_with('<') {
            format!("#include {header}")
        } else {
            format!("#include <{header}>")
        }
    }

    fn forward_declaration(&self, name: &str) -> String {
        format!("class {name};")
    }

    fn render_layout(&self, layout: &ClassLayout) -> String {
        layout::render(layout)
    }
}
