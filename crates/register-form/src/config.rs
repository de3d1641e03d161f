// File: src/config.rs
// Purpose: Form behavior configuration, parsed from register-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form behavior switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Re-check an already-edited `repPassword` whenever `password` changes.
    /// Off by default: the confirmation keeps its last verdict until edited again.
    #[serde(default = "default_false")]
    pub revalidate_confirmation: bool,

    /// Refuse submission while any edited field is invalid, even if every
    /// required field is filled.
    #[serde(default = "default_true")]
    pub reject_invalid_fields: bool,
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            revalidate_confirmation: default_false(),
            reject_invalid_fields: default_true(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./register-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("register-form.toml")
    }

    /// Parse configuration from TOML text. Blank text yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(content).context("Invalid form configuration")
    }
}
