// File: src/field.rs
// Purpose: The eight named input slots of the registration form

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// A single named input slot in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "lname")]
    LastName,
    #[serde(rename = "age")]
    Age,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "username")]
    Username,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "repPassword")]
    RepeatPassword,
}

impl Field {
    /// Every field, in the order the form lays them out
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::LastName,
        Field::Age,
        Field::Email,
        Field::Phone,
        Field::Username,
        Field::Password,
        Field::RepeatPassword,
    ];

    /// Fields that must be non-empty to submit, in the order they are checked
    pub const REQUIRED: [Field; 5] = [
        Field::Name,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::RepeatPassword,
    ];

    /// Name used as the input's `name` attribute and in acknowledgments
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::LastName => "lname",
            Field::Age => "age",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Username => "username",
            Field::Password => "password",
            Field::RepeatPassword => "repPassword",
        }
    }

    /// Human-readable label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::LastName => "Last Name",
            Field::Age => "Age",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
            Field::Username => "Username",
            Field::Password => "Password",
            Field::RepeatPassword => "Repeat Password",
        }
    }

    /// HTML input type for the field
    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Age => "date",
            Field::Email => "email",
            Field::Password | Field::RepeatPassword => "password",
            _ => "text",
        }
    }

    pub fn is_required(&self) -> bool {
        Field::REQUIRED.contains(self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
