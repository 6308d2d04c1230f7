//! Whole-class document assembly.

use crate::emitter::DeclarationEmitter;
use crate::error::CodegenError;
use crate::naming::{to_file_identifier, to_guard_token, to_title_case};
use crate::resolver::TypeResolver;
use crate::target::{ClassLayout, ClassSections, TargetLanguage};
use stubber_schema::{SchemaRecord, TemplateParam, Visibility, validate_record};

/// Assembles one class declaration document from a schema record.
pub struct ClassAssembler<'a> {
    target: &'a dyn TargetLanguage,
    author: Option<&'a str>,
}

impl<'a> ClassAssembler<'a> {
    /// Creates a new assembler.
    #[must_use]
    pub fn new(target: &'a dyn TargetLanguage) -> Self {
        Self {
            target,
            author: None,
        }
    }

    /// Sets the author shown in the document banner.
    #[must_use]
    pub fn with_author(mut self, author: Option<&'a str>) -> Self {
        self.author = author;
        self
    }

    /// Assembles the unnormalized document text.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if the record fails validation, most
    /// notably when `name` is missing. No text is produced in that case.
    pub fn assemble(&self, record: &SchemaRecord) -> Result<String, CodegenError> {
        let layout = self.layout(record)?;
        Ok(self.target.render_layout(&layout))
    }

    /// Computes the named fragments of the document.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if the record fails validation.
    pub fn layout(&self, record: &SchemaRecord) -> Result<ClassLayout, CodegenError> {
        validate_record(record)?;

        let resolver = TypeResolver::new(self.target);
        let emitter = DeclarationEmitter::new(self.target);
        let template_params = template_params(&resolver, &record.template);
        let template_prefix = if template_params.is_empty() {
            String::new()
        } else {
            format!("template{template_params}\n")
        };

        let [public_functions, protected_functions, private_functions] = Visibility::ALL
            .map(|v| emitter.emit_function_section(v, record.functions.get(v)));
        let [public_members, protected_members, private_members] =
            Visibility::ALL.map(|v| emitter.emit_member_section(v, record.members.get(v)));

        Ok(ClassLayout {
            file_name: format!(
                "{}{}",
                to_file_identifier(&record.name),
                self.target.file_extension()
            ),
            author: self.author.map(str::to_string),
            guard: to_guard_token(&record.name),
            title: to_title_case(&record.name),
            includes: join_lines(record.includes.iter().map(|h| self.target.include_line(h))),
            forwards: join_lines(
                record
                    .forwards
                    .iter()
                    .map(|f| self.target.forward_declaration(f)),
            ),
            template_params,
            template_prefix,
            supers: super_classes(&resolver, &record.supers),
            sections: ClassSections {
                public_functions,
                protected_functions,
                private_functions,
                public_members,
                protected_members,
                private_members,
            },
        })
    }
}

/// Makes the inheritance clause: ` : public A, public B`.
fn super_classes(resolver: &TypeResolver<'_>, supers: &[String]) -> String {
    if supers.is_empty() {
        return String::new();
    }
    let bases = supers
        .iter()
        .map(|s| format!("public {}", resolver.resolve(s)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(" : {bases}")
}

/// Makes the template clause: `< typename T, int N = 4 >`.
fn template_params(resolver: &TypeResolver<'_>, params: &[TemplateParam]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let params = params
        .iter()
        .map(|p| {
            let mut param = format!("{} {}", resolver.resolve(&p.type_expr), p.name);
            let default = p.default.as_ref().map(ToString::to_string).unwrap_or_default();
            if !default.is_empty() {
                param.push_str(&format!(" = {default}"));
            }
            param
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("< {params} >")
}

fn join_lines(lines: impl Iterator<Item = String>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpp::Cpp;
    use stubber_schema::{FunctionSpec, Scalar};

    fn widget() -> SchemaRecord {
        SchemaRecord::new("Widget")
            .with_super("Base")
            .with_member(Visibility::Public, "count", "int")
            .with_function(Visibility::Public, "getCount", FunctionSpec::new().returns("int"))
    }

    #[test]
    fn test_layout_widget() {
        let cpp = Cpp::new();
        let layout = ClassAssembler::new(&cpp).layout(&widget()).expect("Failed to assemble");

        assert_eq!(layout.file_name, "widget.hpp");
        assert_eq!(layout.guard, "WIDGET");
        assert_eq!(layout.title, "Widget");
        assert_eq!(layout.supers, " : public Base");
        assert_eq!(layout.template_params, "");
        assert_eq!(layout.template_prefix, "");
        assert_eq!(
            layout.sections.public_functions,
            "// Public functions.\npublic:\n    int getCount();\n"
        );
        assert_eq!(
            layout.sections.public_members,
            "// Public members.\npublic:\n    int m_count;\n"
        );
        assert!(layout.sections.protected_functions.is_empty());
        assert!(layout.sections.private_members.is_empty());
    }

    #[test]
    fn test_layout_multiple_supers() {
        let cpp = Cpp::new();
        let record = widget().with_super("Observer of Widget");
        let layout = ClassAssembler::new(&cpp).layout(&record).expect("Failed to assemble");

        assert_eq!(layout.supers, " : public Base, public Observer< Widget >");
    }

    #[test]
    fn test_layout_template_params() {
        let cpp = Cpp::new();
        let record = SchemaRecord::new("Pool")
            .with_template_param(TemplateParam::new("typename", "T"))
            .with_template_param(TemplateParam::new("int", "N").with_default(Scalar::Int(16)))
            .with_template_param(TemplateParam::new("typename", "A").with_default(Scalar::from("")));
        let layout = ClassAssembler::new(&cpp).layout(&record).expect("Failed to assemble");

        assert_eq!(layout.template_params, "< typename T, int N = 16, typename A >");
        assert_eq!(
            layout.template_prefix,
            "template< typename T, int N = 16, typename A >\n"
        );
    }

    #[test]
    fn test_layout_float_default() {
        let cpp = Cpp::new();
        let record = SchemaRecord::new("Scale")
            .with_template_param(TemplateParam::new("double", "F").with_default(Scalar::Float(1.0)));

        let layout = ClassAssembler::new(&cpp).layout(&record).expect("Failed to assemble");
        assert_eq!(layout.template_params, "< double F = 1.0 >");
    }

    #[test]
    fn test_layout_includes_and_forwards() {
        let cpp = Cpp::new();
        let mut record = widget();
        record.includes = vec!["vector".to_string(), "\"base.hpp\"".to_string()];
        record.forwards = vec!["Node".to_string()];
        let layout = ClassAssembler::new(&cpp).layout(&record).expect("Failed to assemble");

        assert_eq!(layout.includes, "#include <vector>\n#include \"base.hpp\"");
        assert_eq!(layout.forwards, "class Node;");
    }

    #[test]
    fn test_assemble_rejects_missing_name() {
        let cpp = Cpp::new();
        let record = SchemaRecord::default().with_super("Base");
        let err = ClassAssembler::new(&cpp).assemble(&record).unwrap_err();

        assert!(err.is_missing_field());
    }

    #[test]
    fn test_assemble_author() {
        let cpp = Cpp::new();
        let output = ClassAssembler::new(&cpp)
            .with_author(Some("Ada"))
            .assemble(&widget())
            .expect("Failed to assemble");

        assert!(output.contains("// widget.hpp Authored by Ada."));
    }
}
