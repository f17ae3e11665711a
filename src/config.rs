//! Engine preferences
//!
//! Formatting choices the edit synthesizer honors when producing new text.
//! Loaded from an optional `tsxmend.toml` at the project root; every field
//! has a default so a missing file means default preferences.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "tsxmend.toml";

/// Per-request formatting preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnginePreferences {
    /// Indentation unit used for inserted type members
    #[serde(default = "defaults::indent")]
    pub indent: String,

    /// Whether the position locator may land on documentation comments
    #[serde(default)]
    pub include_documentation: bool,
}

impl Default for EnginePreferences {
    fn default() -> Self {
        Self {
            indent: defaults::indent(),
            include_documentation: false,
        }
    }
}

mod defaults {
    pub fn indent() -> String {
        "  ".to_string()
    }
}

impl EnginePreferences {
    /// Load preferences from `<root>/tsxmend.toml`, defaulting when absent.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        let prefs: Self = toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if prefs.indent.chars().any(|c| !c.is_whitespace()) {
            return Err(ConfigError::InvalidValue {
                key: "indent".to_string(),
                message: "must be whitespace".to_string(),
            });
        }
        Ok(prefs)
    }
}
