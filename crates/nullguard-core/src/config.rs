//! Configuration file loading for nullguard.
//!
//! Reads `.nullguard/nullguard.json` and provides typed access to the
//! validation policy. Falls back to the default policy when the config file
//! is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::categories::ValidationCategories;

pub const CONFIG_FILE: &str = "nullguard.json";

/// Whether output parameters count as "may not be null" candidates.
///
/// With `Exempt`, pure `out` parameters never qualify, so exit checks only
/// cover by-reference (`InOut`) parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutParameterPolicy {
    #[default]
    Eligible,
    Exempt,
}

/// Categories applied to every member whose signature starts with `member_prefix`.
///
/// A prefix naming a type (`Sample::`) acts like a type-level override; a full
/// signature acts like a member-level override. The longest match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberOverride {
    pub member_prefix: String,
    pub categories: ValidationCategories,
}

/// Top-level nullguard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    pub version: String,
    #[serde(default)]
    pub categories: ValidationCategories,
    #[serde(default)]
    pub out_parameters: OutParameterPolicy,
    #[serde(default)]
    pub overrides: Vec<MemberOverride>,
}

/// Errors from strict configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            categories: ValidationCategories::ALL_PUBLIC,
            out_parameters: OutParameterPolicy::default(),
            overrides: vec![],
        }
    }
}

impl GuardConfig {
    /// Load configuration from `nullguard.json` inside the given directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match Self::from_json_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse nullguard config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Like [`GuardConfig::load`] but surfaces every failure, including a missing file.
    pub fn load_strict(config_dir: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(config_dir.join(CONFIG_FILE))?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Categories in force for the member with the given signature.
    /// Surrounding whitespace is ignored, as it is for member identity.
    pub fn categories_for(&self, signature: &str) -> ValidationCategories {
        let signature = signature.trim();
        self.overrides
            .iter()
            .map(|o| (o.member_prefix.trim(), o.categories))
            .filter(|(prefix, _)| signature.starts_with(prefix))
            .max_by_key(|(prefix, _)| prefix.len())
            .map_or(self.categories, |(_, categories)| categories)
    }
}
