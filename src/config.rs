//! Configuration handling for the form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_LOG_FILTER: &str = "profile_form=warn";

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: Option<String>,
    /// Pretty-print submitted profiles
    pub pretty_output: Option<bool>,
    /// Mask password fields in printed output
    pub redact_passwords: Option<bool>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "profile-form", "profile-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn pretty_output(&self) -> bool {
        self.pretty_output.unwrap_or(true)
    }

    pub fn redact_passwords(&self) -> bool {
        self.redact_passwords.unwrap_or(false)
    }
}
