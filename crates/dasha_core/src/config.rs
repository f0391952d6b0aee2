//! Query configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dasha::types::{DEFAULT_DASHA_LEVEL, DashaMode, validate_max_level};
use crate::error::DashaError;

/// Which structure to query and how deep to resolve.
///
/// Missing JSON fields take their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashaConfig {
    /// Vimshottari tree or Tribhagi parts.
    pub mode: DashaMode,
    /// Deepest level index to resolve (0 = mahadasha only, max 2).
    pub max_level: u8,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            mode: DashaMode::Vimshottari,
            max_level: DEFAULT_DASHA_LEVEL,
        }
    }
}

impl DashaConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, DashaError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, DashaError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Reject a level deeper than the tree holds.
    pub fn validate(&self) -> Result<(), DashaError> {
        validate_max_level(self.max_level)
    }
}
