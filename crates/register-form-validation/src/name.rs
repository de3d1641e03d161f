//! Person name validation

use alloc::format;
use alloc::string::{String, ToString};

/// Pattern a first or last name must match.
pub const PERSON_NAME_PATTERN: &str = r"^[A-Za-z][A-Za-z ]{3,19}$";

/// Shortest accepted name, in characters
pub const NAME_MIN_CHARS: usize = 4;

/// Longest accepted name, in characters
pub const NAME_MAX_CHARS: usize = 20;

/// Checks a name against [`PERSON_NAME_PATTERN`].
///
/// The raw value is matched as-is: a leading space fails, trailing spaces count
/// toward the length.
#[cfg(feature = "regex-validation")]
pub fn is_valid_person_name(value: &str) -> bool {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static PERSON_NAME: Lazy<Regex> =
        Lazy::new(|| Regex::new(PERSON_NAME_PATTERN).expect("PERSON_NAME_PATTERN is a valid regex"));

    PERSON_NAME.is_match(value)
}

#[cfg(not(feature = "regex-validation"))]
pub fn is_valid_person_name(value: &str) -> bool {
    matches_person_name(value)
}

/// Char-by-char equivalent of [`PERSON_NAME_PATTERN`]
#[cfg(any(test, not(feature = "regex-validation")))]
fn matches_person_name(value: &str) -> bool {
    let mut chars = value.chars();
    let first_is_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let count = value.chars().count();

    first_is_letter
        && (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&count)
        && chars.all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Validates a name and reports the first rule it breaks
pub fn validate_person_name(value: &str) -> Result<(), String> {
    let count = value.chars().count();

    let checks = [
        (!value.is_empty(), "Name must not be empty".to_string()),
        (
            value.chars().next().is_some_and(|c| c.is_ascii_alphabetic()),
            "Name must start with a letter".to_string(),
        ),
        (
            value.chars().all(|c| c.is_ascii_alphabetic() || c == ' '),
            "Name may only contain letters and spaces".to_string(),
        ),
        (
            (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&count),
            format!(
                "Name must be between {} and {} characters",
                NAME_MIN_CHARS, NAME_MAX_CHARS
            ),
        ),
    ];

    checks
        .into_iter()
        .find(|(valid, _)| !valid)
        .map(|(_, msg)| Err(msg))
        .unwrap_or(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[cfg(feature = "regex-validation")]
    #[test]
    fn test_pattern_compiles() {
        assert!(regex::Regex::new(PERSON_NAME_PATTERN).is_ok());
    }

    #[test]
    fn test_accepts_plain_names() {
        assert!(is_valid_person_name("John"));
        assert!(is_valid_person_name("Mary Ann"));
        assert!(is_valid_person_name("Abcd"));
        assert!(is_valid_person_name("Abcdefghijklmnopqrst"));
        assert!(is_valid_person_name("Abcd   "));
    }

    #[test]
    fn test_rejects_bad_names() {
        assert!(!is_valid_person_name(""));
        assert!(!is_valid_person_name("Abc"));
        assert!(!is_valid_person_name("Abcdefghijklmnopqrstu"));
        assert!(!is_valid_person_name(" John"));
        assert!(!is_valid_person_name("1John"));
        assert!(!is_valid_person_name("O'Brien"));
        assert!(!is_valid_person_name("Jöhn"));
        assert!(!is_valid_person_name("John\n"));
    }

    #[test]
    fn test_detailed_reasons() {
        assert_eq!(validate_person_name("John"), Ok(()));
        assert_eq!(
            validate_person_name(""),
            Err("Name must not be empty".to_string())
        );
        assert_eq!(
            validate_person_name(" John"),
            Err("Name must start with a letter".to_string())
        );
        assert_eq!(
            validate_person_name("O'Brien"),
            Err("Name may only contain letters and spaces".to_string())
        );
        assert_eq!(
            validate_person_name("Al"),
            Err("Name must be between 4 and 20 characters".to_string())
        );
    }

    proptest! {
        #[test]
        fn matching_names_are_accepted(value in "[A-Za-z][A-Za-z ]{3,19}") {
            prop_assert!(is_valid_person_name(&value));
            prop_assert!(validate_person_name(&value).is_ok());
        }

        #[test]
        fn regex_and_fallback_agree(value in "\\PC{0,24}") {
            prop_assert_eq!(is_valid_person_name(&value), matches_person_name(&value));
            prop_assert_eq!(is_valid_person_name(&value), validate_person_name(&value).is_ok());
        }
    }
}
