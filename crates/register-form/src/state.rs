// File: src/state.rs
// Purpose: Field values, per-field validation state, and the presentation derived from it

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Validation state of one field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum FieldState {
    /// Never edited since the form was mounted
    #[default]
    Untouched,
    /// Edited, and the current value passes its rule
    Valid,
    /// Edited, and the current value fails its rule
    Invalid(String),
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid(_))
    }

    /// Error message, if the field is invalid
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldState::Invalid(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Short tag used by hosts: `neutral`, `valid` or `invalid`
    pub fn tag(&self) -> &'static str {
        self.presentation().tag()
    }

    /// Presentation hint for the renderer. Pure.
    pub fn presentation(&self) -> Presentation<'_> {
        match self {
            FieldState::Untouched => Presentation::Neutral,
            FieldState::Valid => Presentation::Success,
            FieldState::Invalid(msg) => Presentation::Error(msg),
        }
    }
}

/// How a field should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation<'a> {
    Neutral,
    Success,
    /// Error style, with the message shown beneath the field
    Error(&'a str),
}

impl Presentation<'_> {
    pub fn tag(&self) -> &'static str {
        match self {
            Presentation::Neutral => "neutral",
            Presentation::Success => "valid",
            Presentation::Error(_) => "invalid",
        }
    }
}

/// Current value of every field. A missing entry reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: BTreeMap<Field, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field, `""` if it was never set
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(|s| s.as_str()).unwrap_or("")
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: Field, value: String) {
        self.values.insert(field, value);
    }

    /// True when the field is missing or empty
    pub fn is_blank(&self, field: Field) -> bool {
        self.get(field).is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Validation state of every field. A missing entry reads as [`FieldState::Untouched`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    states: BTreeMap<Field, FieldState>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &FieldState {
        static UNTOUCHED: FieldState = FieldState::Untouched;
        self.states.get(&field).unwrap_or(&UNTOUCHED)
    }

    /// Record the outcome of validating one field. Other entries are left alone.
    pub fn set(&mut self, field: Field, state: FieldState) {
        self.states.insert(field, state);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.states.contains_key(&field)
    }

    /// Fields currently failing their rule, in layout order
    pub fn invalid_fields(&self) -> Vec<Field> {
        self.states
            .iter()
            .filter(|(_, state)| state.is_invalid())
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldState)> {
        self.states.iter().map(|(field, state)| (*field, state))
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}
