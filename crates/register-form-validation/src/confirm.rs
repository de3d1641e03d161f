//! Cross-field confirmation

/// Exact, case-sensitive comparison of a confirmation value with the original.
/// No trimming or normalization is applied.
pub fn confirmation_matches(value: &str, original: &str) -> bool {
    value == original
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation() {
        assert!(confirmation_matches("Abcdef1!", "Abcdef1!"));
        assert!(confirmation_matches("", ""));
        assert!(!confirmation_matches("abcdef1!", "Abcdef1!"));
        assert!(!confirmation_matches("Abcdef1! ", "Abcdef1!"));
    }
}
