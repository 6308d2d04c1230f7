//! Member and function declaration generation.

use crate::resolver::TypeResolver;
use crate::target::TargetLanguage;
use std::fmt;
use stubber_schema::{FunctionSpec, OrderedMap, Visibility};

/// Kind of declarations grouped in a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Member functions.
    Functions,
    /// Member variables.
    Members,
}

impl SectionKind {
    /// Returns the word used in section headers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Functions => "functions",
            Self::Members => "members",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generator for declarations and visibility sections.
pub struct DeclarationEmitter<'a> {
    target: &'a dyn TargetLanguage,
    resolver: TypeResolver<'a>,
}

impl<'a> DeclarationEmitter<'a> {
    /// Creates a new declaration emitter.
    #[must_use]
    pub fn new(target: &'a dyn TargetLanguage) -> Self {
        Self {
            target,
            resolver: TypeResolver::new(target),
        }
    }

    /// Generates one function declaration.
    ///
    /// Arguments keep their document order. Produces
    /// `dec ret name( type arg, ... ) mod;` with empty parts left out.
    #[must_use]
    pub fn emit_function(&self, name: &str, spec: &FunctionSpec) -> String {
        let return_type = self
            .resolver
            .resolve(spec.return_type.as_deref().unwrap_or(self.target.void_type()));

        let args = spec
            .args
            .iter()
            .map(|(arg, type_expr)| format!("{} {}", self.resolver.resolve(type_expr), arg))
            .collect::<Vec<_>>()
            .join(", ");
        let args = if args.is_empty() {
            args
        } else {
            format!(" {args} ")
        };

        let head = format!("{} {}", spec.dec.as_deref().unwrap_or(""), return_type);
        let modifier = match spec.modifier.as_deref() {
            Some(m) if !m.trim().is_empty() => format!(" {m}"),
            _ => String::new(),
        };

        format!("{} {}({}){};", head.trim(), name, args, modifier)
            .trim()
            .to_string()
    }

    /// Generates one member variable declaration.
    #[must_use]
    pub fn emit_member(&self, name: &str, type_expr: &str) -> String {
        format!(
            "{} {}{};",
            self.resolver.resolve(type_expr),
            self.target.member_prefix(),
            name
        )
        .trim()
        .to_string()
    }

    /// Generates a function section. Empty input yields an empty string.
    #[must_use]
    pub fn emit_function_section(
        &self,
        visibility: Visibility,
        functions: &OrderedMap<FunctionSpec>,
    ) -> String {
        self.emit_section(
            visibility,
            SectionKind::Functions,
            functions
                .iter()
                .map(|(name, spec)| self.emit_function(name, spec)),
        )
    }

    /// Generates a member section. Empty input yields an empty string.
    #[must_use]
    pub fn emit_member_section(
        &self,
        visibility: Visibility,
        members: &OrderedMap<String>,
    ) -> String {
        self.emit_section(
            visibility,
            SectionKind::Members,
            members
                .iter()
                .map(|(name, type_expr)| self.emit_member(name, type_expr)),
        )
    }

    /// Wraps declarations in a commented, labelled section.
    ///
    /// Returns an empty string when there are no declarations, so empty
    /// sections never show a header or label.
    #[must_use]
    pub fn emit_section<I>(
        &self,
        visibility: Visibility,
        kind: SectionKind,
        declarations: I,
    ) -> String
    where
        I: IntoIterator<Item = String>,
    {
        let mut items = String::new();
        for declaration in declarations {
            items.push_str(&format!("    {declaration}\n"));
        }
        if items.is_empty() {
            return items;
        }

        let mut output = String::new();
        output.push_str(&format!("// {} {}.\n", visibility.title(), kind));
        output.push_str(&format!("{visibility}:\n"));
        output.push_str(&items);
        output
    }
}
