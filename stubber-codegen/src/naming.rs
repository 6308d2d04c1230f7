//! Name conversions for generated artifacts.

/// Converts a display name to a lower snake_case file identifier.
///
/// An underscore goes before every uppercase letter except the first
/// character; surrounding whitespace is trimmed first.
#[must_use]
pub fn to_file_identifier(name: &str) -> String {
    let name = name.trim();
    let mut result = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// Capitalizes the first letter of every word, leaving the rest untouched.
#[must_use]
pub fn to_title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = true;

    for c in name.trim().chars() {
        if capitalize_next && c.is_alphabetic() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        capitalize_next = !c.is_alphanumeric() && c != '_';
    }

    result
}

/// Converts a display name to an upper-case token usable in macros.
#[must_use]
pub fn to_guard_token(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}
