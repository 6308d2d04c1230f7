//! Whitespace normalization of generated documents.

/// Collapses redundant whitespace in a document.
///
/// Non-blank lines keep their indentation; runs of spaces inside them become
/// one space and trailing whitespace goes. Runs of blank lines become a
/// single blank line, and blank lines at the end are dropped. Applying this
/// twice gives the same result as applying it once.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut pending_blank = false;

    for line in text.lines() {
        let content = line.trim_start();
        if content.is_empty() {
            pending_blank = true;
            continue;
        }
        if pending_blank {
            output.push('\n');
            pending_blank = false;
        }

        output.push_str(&line[..line.len() - content.len()]);
        let mut words = content.split_whitespace();
        if let Some(first) = words.next() {
            output.push_str(first);
        }
        for word in words {
            output.push(' ');
            output.push_str(word);
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_collapses_internal_spaces() {
        assert_eq!(normalize("class  Widget   : public Base  \n"), "class Widget : public Base\n");
    }

    #[test]
    fn test_normalize_keeps_indentation() {
        assert_eq!(normalize("    int   m_count;\n"), "    int m_count;\n");
        assert_eq!(normalize("\t int  x;"), "\t int x;\n");
    }

    #[test]
    fn test_normalize_collapses_blank_runs() {
        let input = "a\n\n\n   \nb\n\n";
        assert_eq!(normalize(input), "a\n\nb\n");
    }

    #[test]
    fn test_normalize_leading_blank_lines() {
        assert_eq!(normalize("\n\n\nfoo"), "\nfoo\n");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\n \n\t\n"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "",
            "x",
            "\n\n  a  b \n\n\n\tc\td\n  \n",
            "// Public functions.\npublic:\n    int  getCount();\n\n\n\n};\n\n#endif\n",
            "\r\nwindows  line\r\n\r\n\r\nnext\r\n",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    proptest! {
        #[test]
        fn test_normalize_idempotent_on_any_text(text in "[ \t\r\na-z;{}]{0,80}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn test_normalize_output_shape(text in "[ \t\na-z]{0,80}") {
            let output = normalize(&text);
            prop_assert!(output.is_empty() || output.ends_with('\n'));
            prop_assert!(!output.contains("\n\n\n"));
            prop_assert!(!output.ends_with("\n\n"));
            for line in output.lines() {
                prop_assert_eq!(line.trim_end(), line);
                prop_assert!(!line.trim_start().contains("  "));
            }
        }
    }
}
