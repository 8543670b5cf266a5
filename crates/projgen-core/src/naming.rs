//! Project-name normalization

use std::path::{Component, Path};

/// Turn a free-form project name into a directory-safe kebab-case token.
///
/// Surrounding whitespace is trimmed, underscores and whitespace become hyphens,
/// the result is lower-cased and hyphen runs collapse to a single hyphen.
/// An empty or blank name yields an empty string.
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !out.ends_with('-') {
                out.push('-');
            }
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// True when `dir_name` names exactly one directory entry, so joining it onto
/// a base directory cannot leave that directory.
pub fn is_single_dir_name(dir_name: &str) -> bool {
    let mut components = Path::new(dir_name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_mixed_separators() {
        assert_eq!(normalize("My Cool_App"), "my-cool-app");
    }

    #[test]
    fn test_single_dir_name() {
        assert!(is_single_dir_name("my-app"));
        assert!(is_single_dir_name(&normalize("My App")));
        assert!(!is_single_dir_name(""));
        assert!(!is_single_dir_name("."));
        assert!(!is_single_dir_name(".."));
        assert!(!is_single_dir_name(&normalize("../x")));
        assert!(!is_single_dir_name(&normalize("a/b")));
        assert!(!is_single_dir_name(&normalize("/tmp/escaped")));
    }

    #[test]
    fn test_normalize_already_kebab() {
        assert_eq!(normalize("already-kebab"), "already-kebab");
    }

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(normalize("  a __ b--c  "), "a-b-c");
        assert_eq!(normalize("tab\tand\nnewline"), "tab-and-newline");
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t "), "");
    }

    proptest! {
        #[test]
        fn normalized_names_are_kebab(name in "[A-Za-z0-9 _\\t.-]{0,40}") {
            let out = normalize(&name);
            prop_assert!(!out.chars().any(char::is_uppercase));
            prop_assert!(!out.chars().any(char::is_whitespace));
            prop_assert!(!out.contains('_'));
            prop_assert!(!out.contains("--"));
        }

        #[test]
        fn normalize_is_a_fixed_point(name in "[A-Za-z0-9 _\\t.-]{0,40}") {
            let once = normalize(&name);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
