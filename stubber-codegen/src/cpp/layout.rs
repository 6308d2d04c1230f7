//! C++ header document layout.

use crate::target::ClassLayout;

const RULE: &str =
    "//~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

/// Renders a header from its fragments.
///
/// The result is not normalized; sections end in newlines and empty
/// fragments leave blank lines behind.
#[must_use]
pub fn render(layout: &ClassLayout) -> String {
    let mut output = String::new();

    // Banner
    output.push_str(RULE);
    output.push('\n');
    match &layout.author {
        Some(author) => {
            output.push_str(&format!("// {} Authored by {}.\n", layout.file_name, author));
        }
        None => output.push_str(&format!("// {}\n", layout.file_name)),
    }
    output.push_str(RULE);
    output.push('\n');

    output.push_str(&format!("#ifndef __HEADER_{}__\n", layout.guard));
    output.push_str(&format!("#define __HEADER_{}__\n\n", layout.guard));

    output.push_str(&layout.includes);
    output.push('\n');
    output.push_str(&layout.forwards);
    output.push_str("\n\n");

    // Class
    output.push_str(RULE);
    output.push('\n');
    output.push_str(&format!(
        "// Definition of {}{}.\n",
        layout.title, layout.template_params
    ));
    output.push_str(&layout.template_prefix);
    output.push_str(&format!("class {}{}\n", layout.title, layout.supers));
    output.push_str("{\n");
    for section in layout.sections.in_order() {
        output.push_str(section);
        output.push('\n');
    }
    output.push_str("};\n\n");

    output.push_str(&format!("#endif // __HEADER_{}__\n", layout.guard));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::ClassSections;

    fn widget_layout() -> ClassLayout {
        ClassLayout {
            file_name: "widget.hpp".to_string(),
            author: None,
            guard: "WIDGET".to_string(),
            title: "Widget".to_string(),
            supers: " : public Base".to_string(),
            sections: ClassSections {
                public_members: "// Public members.\npublic:\n    int m_count;\n".to_string(),
                ..ClassSections::default()
            },
            ..ClassLayout::default()
        }
    }

    #[test]
    fn test_render_guards() {
        let output = render(&widget_layout());

        assert!(output.contains("#ifndef __HEADER_WIDGET__\n#define __HEADER_WIDGET__\n"));
        assert!(output.ends_with("#endif // __HEADER_WIDGET__\n"));
    }

    #[test]
    fn test_render_class_signature() {
        let output = render(&widget_layout());

        assert!(output.contains("// Definition of Widget.\nclass Widget : public Base\n{\n"));
        assert!(output.contains("    int m_count;\n"));
        assert!(!output.contains("template"));
    }

    #[test]
    fn test_render_author_banner() {
        let mut layout = widget_layout();
        layout.author = Some("Ada".to_string());
        let output = render(&layout);

        assert!(output.contains("// widget.hpp Authored by Ada.\n"));
    }

    #[test]
    fn test_render_template_prefix() {
        let mut layout = widget_layout();
        layout.template_params = "< typename T >".to_string();
        layout.template_prefix = "template< typename T >\n".to_string();
        let output = render(&layout);

        assert!(output.contains("// Definition of Widget< typename T >.\n"));
        assert!(output.contains("template< typename T >\nclass Widget : public Base\n"));
    }
}
