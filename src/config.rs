use crate::error::SawError;
use crate::tty::should_use_colors;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Logger configuration. Colors are off unless asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SawConfig {
    pub colors: bool,
}

impl SawConfig {
    /// Enable colors only when stdout is a terminal
    pub fn auto() -> Self {
        SawConfig {
            colors: should_use_colors(),
        }
    }

    /// Parse a YAML (or JSON) document such as `colors: true`
    pub fn from_yaml_str(content: &str) -> Result<Self, SawError> {
        if content.trim().is_empty() {
            return Ok(SawConfig::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SawError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
