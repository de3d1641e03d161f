//! Password strength validation

use alloc::string::{String, ToString};

/// Symbols that satisfy the "special character" requirement
pub const PASSWORD_SYMBOLS: &str = "@#$%^&+=!";

/// Minimum password length, in characters
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Characters that end a line; a password containing one is rejected
pub const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Returns true when the password meets every strength requirement
pub fn is_strong_password(password: &str) -> bool {
    validate_password_strength(password).is_ok()
}

/// Password validation: 8+ chars with lowercase, uppercase, digit and a symbol
/// from [`PASSWORD_SYMBOLS`], on a single line. Reports the first requirement that is not met.
pub fn validate_password_strength(password: &str) -> Result<(), String> {
    let checks = [
        (
            password.chars().count() >= PASSWORD_MIN_CHARS,
            "Password must be at least 8 characters",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Password must contain at least one lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Password must contain at least one uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Password must contain at least one digit",
        ),
        (
            has_symbol(password),
            "Password must contain at least one special character (@#$%^&+=!)",
        ),
        (
            !password.contains(&LINE_TERMINATORS[..]),
            "Password must not contain line breaks",
        ),
    ];

    checks
        .iter()
        .find(|(valid, _)| !valid)
        .map(|(_, msg)| Err(msg.to_string()))
        .unwrap_or(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strong_passwords() {
        assert!(is_strong_password("Abcdef1!"));
        assert!(is_strong_password("P@ssw0rd"));
        assert!(is_strong_password("xY9^long enough"));
    }

    #[test]
    fn test_weak_passwords() {
        assert!(!is_strong_password("abcdefgh"));
        assert!(!is_strong_password("Abc1!"));
        assert!(!is_strong_password("ABCDEF1!"));
        assert!(!is_strong_password("abcdef1!"));
        assert!(!is_strong_password("Abcdefg!"));
        assert!(!is_strong_password("Abcdefg1"));
        // '*' is not in the accepted symbol set
        assert!(!is_strong_password("Abcdef1*"));
    }

    #[test]
    fn test_line_breaks_rejected() {
        assert!(!is_strong_password("Abcdef1!\n"));
        assert!(!is_strong_password("Abc\ndef1!"));
        assert!(!is_strong_password("Abcdef1!\r"));
        assert!(!is_strong_password("Abcdef1!\u{2028}"));
        assert!(!is_strong_password("Abcdef1!\u{2029}"));
        assert_eq!(
            validate_password_strength("Abcdef1!\n"),
            Err("Password must not contain line breaks".to_string())
        );
        // Other whitespace is fine
        assert!(is_strong_password("Abc def1!\t"));
    }

    #[test]
    fn test_reports_first_failure() {
        assert_eq!(
            validate_password_strength("Ab1!"),
            Err("Password must be at least 8 characters".to_string())
        );
        assert_eq!(
            validate_password_strength("ABCDEFG1!"),
            Err("Password must contain at least one lowercase letter".to_string())
        );
        assert_eq!(
            validate_password_strength("Abcdefgh1"),
            Err("Password must contain at least one special character (@#$%^&+=!)".to_string())
        );
    }

    proptest! {
        #[test]
        fn short_passwords_always_fail(value in "\\PC{0,7}") {
            prop_assert!(!is_strong_password(&value));
        }

        #[test]
        fn passwords_without_symbols_fail(value in "[A-Za-z0-9]{0,32}") {
            prop_assert!(!is_strong_password(&value));
        }
    }
}
