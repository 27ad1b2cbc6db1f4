//! Build configuration for the markup generator.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Settings for one visualization build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Intents with more payloads than this go to the individual vertex group.
    pub abbreviation_threshold: usize,

    /// Edge colors, picked by the followup's position in its source's list.
    pub edge_palette: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            abbreviation_threshold: 2,
            edge_palette: vec![
                "#69b3a2".to_string(),
                "#0000ff".to_string(),
                "#ff7f0e".to_string(),
                "#9467bd".to_string(),
                "#d62728".to_string(),
            ],
        }
    }
}

impl BuildConfig {
    /// Parse a TOML document; missing keys fall back to the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ModelError> {
        Ok(toml::from_str(source)?)
    }

    /// Override the abbreviation threshold.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.abbreviation_threshold = threshold;
        self
    }
}
