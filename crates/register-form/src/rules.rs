// File: src/rules.rs
// Purpose: Declarative rule table binding each field to exactly one validation rule

use register_form_validation as core;

use crate::field::Field;
use crate::state::{FieldState, FormValues};

/// Shown when the password fails any strength requirement
pub const PASSWORD_MESSAGE: &str = "Password is invalid. It must contain at least one uppercase letter, one lowercase letter, one number, and one special character.";

/// Shown when the confirmation differs from the password
pub const MISMATCH_MESSAGE: &str = "Passwords do not match.";

/// A pure check of one field's value against the current form snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Letters and spaces, 4-20 characters, starting with a letter.
    /// The message mentions apostrophes, which the pattern does not accept.
    PersonName { label: &'static str },
    /// 8+ characters with lowercase, uppercase, digit and a symbol
    StrongPassword,
    /// Must equal the current value of another field
    Matches(Field),
    /// No live rule; any value is valid
    Accept,
}

/// The rule bound to a field
pub fn rule_for(field: Field) -> Rule {
    match field {
        Field::Name => Rule::PersonName { label: "name" },
        Field::LastName => Rule::PersonName { label: "Last name" },
        Field::Password => Rule::StrongPassword,
        Field::RepeatPassword => Rule::Matches(Field::Password),
        Field::Age | Field::Email | Field::Phone | Field::Username => Rule::Accept,
    }
}

impl Rule {
    /// Judge `value` against this rule. `form` is read for cross-field rules only.
    pub fn check(&self, value: &str, form: &FormValues) -> FieldState {
        match self {
            Rule::PersonName { label } => {
                if core::is_valid_person_name(value) {
                    FieldState::Valid
                } else {
                    FieldState::Invalid(format!(
                        "Invalid {}. Only letters, spaces, apostrophes are allowed.",
                        label
                    ))
                }
            }
            Rule::StrongPassword => {
                if core::is_strong_password(value) {
                    FieldState::Valid
                } else {
                    FieldState::Invalid(PASSWORD_MESSAGE.to_string())
                }
            }
            Rule::Matches(other) => {
                if core::confirmation_matches(value, form.get(*other)) {
                    FieldState::Valid
                } else {
                    FieldState::Invalid(MISMATCH_MESSAGE.to_string())
                }
            }
            Rule::Accept => FieldState::Valid,
        }
    }

    /// Field whose value this rule reads, besides the one being checked
    pub fn depends_on(&self) -> Option<Field> {
        match self {
            Rule::Matches(other) => Some(*other),
            _ => None,
        }
    }
}
