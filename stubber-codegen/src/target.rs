//! Target language abstraction.
//!
//! Everything that changes between output languages sits behind
//! [`TargetLanguage`]: the modifier and container tables, the generic
//! template fallback, naming constants, and the document layout.

/// Per-language tables and layout used by the generators.
pub trait TargetLanguage: Send + Sync {
    /// Short language name, used in logs.
    fn name(&self) -> &'static str;

    /// Suffix appended to generated file names, including the dot.
    fn file_extension(&self) -> &str;

    /// Decoration for a lower-cased modifier key, if known.
    fn modifier(&self, key: &str) -> Option<&'static str>;

    /// Template pattern for a container alias. Each `{}` is one argument.
    fn container(&self, name: &str) -> Option<&'static str>;

    /// Instantiation of a template that has no alias.
    fn generic_template(&self, name: &str, args: &[String]) -> String;

    /// Type used when a function declares no return type.
    fn void_type(&self) -> &'static str;

    /// Prefix prepended to member variable names.
    fn member_prefix(&self) -> &'static str;

    /// One include line for a header.
    fn include_line(&self, header: &str) -> String;

    /// One forward declaration for a class name.
    fn forward_declaration(&self, name: &str) -> String;

    /// Renders the whole document from its fragments.
    fn render_layout(&self, layout: &ClassLayout) -> String;
}

/// Named fragments of one class document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassLayout {
    /// Output file name, shown in the banner.
    pub file_name: String,
    /// Optional author shown in the banner.
    pub author: Option<String>,
    /// Upper-cased token for include guards.
    pub guard: String,
    /// Class name as declared.
    pub title: String,
    /// Include lines, newline separated.
    pub includes: String,
    /// Forward declarations, newline separated.
    pub forwards: String,
    /// Template parameter clause, e.g. `< typename T >`; empty when none.
    pub template_params: String,
    /// Template prefix line; empty when the class is not a template.
    pub template_prefix: String,
    /// Inheritance clause, e.g. ` : public Base`; empty when none.
    pub supers: String,
    /// Visibility sections in emission order.
    pub sections: ClassSections,
}

/// The six visibility sections of a class body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSections {
    /// Public function section.
    pub public_functions: String,
    /// Protected function section.
    pub protected_functions: String,
    /// Private function section.
    pub private_functions: String,
    /// Public member section.
    pub public_members: String,
    /// Protected member section.
    pub protected_members: String,
    /// Private member section.
    pub private_members: String,
}

impl ClassSections {
    /// Returns the sections in emission order.
    #[must_use]
    pub fn in_order(&self) -> [&str; 6] {
        [
            self.public_functions.as_str(),
            self.protected_functions.as_str(),
            self.private_functions.as_str(),
            self.public_members.as_str(),
            self.protected_members.as_str(),
            self.private_members.as_str(),
        ]
    }
}
