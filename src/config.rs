use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::layout::LayoutConfig;

/// Storefront-wide settings. Every field has a default, so an empty JSON
/// object (or no file at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Panel calculator settings
    pub layout: LayoutConfig,
    /// URL prefix category paths live under
    pub category_prefix: String,
    /// Hide categories without products in menus
    pub hide_empty: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            category_prefix: "/category".to_string(),
            hide_empty: false,
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid storefront config")
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
