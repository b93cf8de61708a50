//! Anchor identifiers for in-page navigation.
//!
//! Every anchor is both an element ID and a URL fragment, so headings and the
//! links pointing at them must be derived through the same functions here.
//! The transformation is deliberately minimal: lowercase, then spaces become
//! hyphens. Punctuation survives (`C++` stays `c++`).

/// Lowercases `text` and replaces every space with a hyphen.
pub fn slugify(text: impl AsRef<str>) -> String {
    text.as_ref().to_lowercase().replace(' ', "-")
}

/// Anchor of the top-level heading for a language.
pub fn language_anchor(lang: impl AsRef<str>) -> String {
    slugify(lang)
}

/// Anchor of the "`lang` in Rust" subsection.
pub fn host_in_rust_anchor(lang: impl AsRef<str>) -> String {
    format!("{}-in-rust", slugify(lang))
}

/// Anchor of the "Rust in `lang`" subsection.
pub fn rust_in_host_anchor(lang: impl AsRef<str>) -> String {
    format!("rust-in-{}", slugify(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("C++", "c++")]
    #[case("Objective C", "objective-c")]
    #[case("Python", "python")]
    #[case("C#", "c#")]
    #[case("Node.js", "node.js")]
    #[case("Two  Spaces", "two--spaces")]
    #[case("", "")]
    fn test_slugify(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[test]
    fn test_only_spaces_become_hyphens() {
        assert_eq!(slugify("Tab\tSeparated"), "tab\tseparated");
    }

    #[test]
    fn test_directional_anchors() {
        assert_eq!(language_anchor("Python"), "python");
        assert_eq!(host_in_rust_anchor("Python"), "python-in-rust");
        assert_eq!(rust_in_host_anchor("Python"), "rust-in-python");
        assert_eq!(rust_in_host_anchor("Objective C"), "rust-in-objective-c");
    }

    #[test]
    fn test_rotation_labels_match_section_anchors() {
        // "Python in Rust" / "Rust in Python" are how rotation labels read.
        assert_eq!(slugify("Python in Rust"), host_in_rust_anchor("Python"));
        assert_eq!(slugify("Rust in Objective C"), rust_in_host_anchor("Objective C"));
    }
}
