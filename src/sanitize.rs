//! Identifier sanitizing for helper names.
//!
//! Route-derived strings (versions like `beta-1`, custom names, path words)
//! must become legal identifiers before they can be used as helper names.

/// Turn an arbitrary string into a legal identifier
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`. A leading ASCII digit
/// is also replaced, digits anywhere else are kept (`v1` stays `v1`).
///
/// # Example
///
/// ```
/// use route_helpers::sanitize::sanitize;
///
/// assert_eq!(sanitize("beta-1"), "beta_1");
/// assert_eq!(sanitize("1"), "_");
/// assert_eq!(sanitize("v1"), "v1");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .enumerate()
        .map(|(i, c)| {
            if i == 0 && c.is_ascii_digit() {
                '_'
            } else if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// True if `name` is already a legal identifier (and non-empty)
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_replaces_illegal_characters() {
        let sanitized: Vec<String> = ["beta-1", "name_with_+", "name_with_("]
            .iter()
            .map(|n| sanitize(n))
            .collect();
        assert_eq!(sanitized, vec!["beta_1", "name_with__", "name_with__"]);
    }

    #[test]
    fn test_only_leading_digit_is_replaced() {
        assert_eq!(sanitize("1"), "_");
        assert_eq!(sanitize("v1"), "v1");
        assert_eq!(sanitize("12ab"), "_2ab");
    }

    #[test]
    fn test_multibyte_characters_become_single_underscore() {
        assert_eq!(sanitize("café"), "caf_");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
        assert!(!is_identifier(""));
    }

    proptest! {
        #[test]
        fn prop_output_is_identifier_charset(raw in ".*") {
            let out = sanitize(&raw);
            prop_assert!(out.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
            prop_assert!(!out.starts_with(|c: char| c.is_ascii_digit()));
        }

        #[test]
        fn prop_idempotent(raw in ".*") {
            let once = sanitize(&raw);
            prop_assert_eq!(sanitize(&once), once.clone());
        }

        #[test]
        fn prop_non_empty_input_is_identifier(raw in ".+") {
            prop_assert!(is_identifier(&sanitize(&raw)));
        }
    }
}
