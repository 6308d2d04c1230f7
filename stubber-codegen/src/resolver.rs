//! Type expression resolution.
//!
//! Turns the compact schema notation into target type syntax:
//!
//! ```text
//! TypeExpr := Segment ( "of" ArgList )?
//! ArgList  := TypeExpr ( "," TypeExpr )*
//! Segment  := Word+
//! Word     := ( Modifier "-" )? Identifier
//! ```
//!
//! With the C++ target, `Map of string, List of ptr-Node` becomes
//! `std::map< string, std::vector< Node* > >`. Resolution never fails;
//! unknown templates and modifiers fall back to plain text.

use crate::target::TargetLanguage;

/// Separator between a template name and its arguments.
const TEMPLATE_SEPARATOR: &str = " of ";

/// Resolves type expressions against a target's tables.
#[derive(Clone, Copy)]
pub struct TypeResolver<'a> {
    target: &'a dyn TargetLanguage,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver for a target.
    #[must_use]
    pub fn new(target: &'a dyn TargetLanguage) -> Self {
        Self { target }
    }

    /// Resolves one type expression.
    #[must_use]
    pub fn resolve(&self, expr: &str) -> String {
        let (base, args) = match expr.split_once(TEMPLATE_SEPARATOR) {
            Some((base, args)) => (base, Some(args)),
            None => (expr, None),
        };

        let (bare, modifier) = strip_modifier(base);
        let decoration = modifier
            .and_then(|key| self.target.modifier(&key.to_lowercase()))
            .unwrap_or("");

        let resolved = match args {
            Some(list) => {
                let args: Vec<String> = list
                    .split(',')
                    .map(|arg| self.resolve(arg.trim()))
                    .collect();
                match self.target.container(&bare) {
                    Some(pattern) => fill_pattern(pattern, &args),
                    None => self.target.generic_template(&bare, &args),
                }
            }
            None => bare,
        };

        resolved + decoration
    }
}

/// Strips `modifier-` prefixes from the words of a segment.
///
/// Every hyphenated word loses its prefix; the last prefix seen is the one
/// returned.
fn strip_modifier(segment: &str) -> (String, Option<&str>) {
    let mut modifier = None;
    let words: Vec<&str> = segment
        .split_whitespace()
        .map(|word| match word.split_once('-') {
            Some((key, ident)) => {
                modifier = Some(key);
                ident
            }
            None => word,
        })
        .collect();
    (words.join(" "), modifier)
}

/// Substitutes arguments into `{}` placeholders in order.
///
/// Placeholders without an argument stay empty; surplus arguments are
/// dropped.
fn fill_pattern(pattern: &str, args: &[String]) -> String {
    let capacity = pattern.len() + args.iter().map(String::len).sum::<usize>();
    let mut output = String::with_capacity(capacity);
    let mut args = args.iter();
    let mut pieces = pattern.split("{}");
    if let Some(first) = pieces.next() {
        output.push_str(first);
    }
    for piece in pieces {
        output.push_str(args.next().map_or("", String::as_str));
        output.push_str(piece);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpp::Cpp;
    use proptest::prelude::*;

    fn resolve(expr: &str) -> String {
        let cpp = Cpp::new();
        TypeResolver::new(&cpp).resolve(expr)
    }

    #[test]
    fn test_resolve_plain() {
        assert_eq!(resolve("Foo"), "Foo");
        assert_eq!(resolve("unsigned   int"), "unsigned int");
    }

    #[test]
    fn test_resolve_modifier() {
        assert_eq!(resolve("ptr-Foo"), "Foo*");
        assert_eq!(resolve("ref-Foo"), "Foo&");
        assert_eq!(resolve("ptrptrptr-char"), "char***");
        assert_eq!(resolve("const ref-Foo"), "const Foo&");
    }

    #[test]
    fn test_resolve_modifier_case_insensitive() {
        assert_eq!(resolve("PTR-Foo"), "Foo*");
        assert_eq!(resolve("RefPtr-Foo"), "Foo&*");
    }

    #[test]
    fn test_resolve_unknown_modifier() {
        assert_eq!(resolve("weak-Foo"), "Foo");
    }

    #[test]
    fn test_resolve_modifier_keeps_rest_of_word() {
        // Only the first hyphen separates the modifier.
        assert_eq!(resolve("ptr-b-c"), "b-c*");
        assert_eq!(resolve("List of ref-my-type"), "std::vector< my-type& >");
    }

    #[test]
    fn test_resolve_last_modifier_wins() {
        assert_eq!(resolve("ref-const ptr-Foo"), "const Foo*");
    }

    #[test]
    fn test_resolve_containers() {
        assert_eq!(resolve("List of int"), "std::vector< int >");
        assert_eq!(resolve("Map of string, int"), "std::map< string, int >");
    }

    #[test]
    fn test_resolve_nested_containers() {
        assert_eq!(
            resolve("Map of string, List of int"),
            "std::map< string, std::vector< int > >"
        );
        assert_eq!(
            resolve("List of List of List of int"),
            "std::vector< std::vector< std::vector< int > > >"
        );
    }

    #[test]
    fn test_resolve_modifiers_inside_arguments() {
        assert_eq!(resolve("List of ptr-Node"), "std::vector< Node* >");
        assert_eq!(resolve("ref-List of int"), "std::vector< int >&");
    }

    #[test]
    fn test_resolve_generic_template() {
        assert_eq!(resolve("Handle of Texture"), "Handle< Texture >");
        assert_eq!(resolve("Tuple of int, float"), "Tuple< int, float >");
    }

    #[test]
    fn test_resolve_trailing_comma_is_tolerated() {
        // The empty piece resolves to an empty type.
        assert_eq!(resolve("Tuple of int,"), "Tuple< int,  >");
        assert_eq!(resolve("List of int,"), "std::vector< int >");
        assert_eq!(resolve(""), "");
    }

    #[test]
    fn test_resolve_missing_alias_arguments() {
        assert_eq!(resolve("Map of int"), "std::map< int,  >");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let expr = "ptr-Map of string, List of ref-Foo";
        let first = resolve(expr);
        for _ in 0..8 {
            assert_eq!(resolve(expr), first);
        }
    }

    #[test]
    fn test_fill_pattern() {
        let args = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(fill_pattern("P< {}, {} >", &args), "P< a, b >");
        assert_eq!(fill_pattern("P", &args), "P");
    }

    proptest! {
        #[test]
        fn test_resolve_nested_lists(
            depth in 0usize..6,
            leaf in "[A-Za-z][A-Za-z0-9_]{0,8}",
            pointer in any::<bool>()
        ) {
            let arg = if pointer { format!("ptr-{leaf}") } else { leaf.clone() };
            let expr = format!("{}{arg}", "List of ".repeat(depth));
            let expected = format!(
                "{}{leaf}{}{}",
                "std::vector< ".repeat(depth),
                if pointer { "*" } else { "" },
                " >".repeat(depth),
            );

            let resolved = resolve(&expr);
            prop_assert_eq!(&resolved, &expected);
            prop_assert_eq!(resolved.matches("std::vector<").count(), depth);
            prop_assert_eq!(resolve(&expr), resolved);
        }
    }
}
