//! TOML render configuration
//!
//! A config file describes one render of a sheet:
//!
//! ```toml
//! range = "A1:E6"
//! sheet = "Sheet1"
//! caption = "Quarterly results"
//! label = "tab:results"
//! position = "htbp"
//! borders = true
//! show_cached_values = true
//! merges = ["A1:B2", "C3:C5"]
//! ```
//!
//! Every key is optional; command-line flags take precedence.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::merge::MergeRegion;
use crate::core::options::{Position, TableOptions};
use crate::utils::error::{RenderError, RenderResult};

/// Deserialized render configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Selection such as `A1:E6`
    pub range: Option<String>,
    /// Sheet name
    pub sheet: Option<String>,
    pub caption: Option<String>,
    pub label: Option<String>,
    pub position: Option<Position>,
    pub borders: Option<bool>,
    /// Show computed values instead of formula text
    pub show_cached_values: Option<bool>,
    /// Merged regions as range expressions
    pub merges: Vec<String>,
}

impl RenderConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(input: &str) -> RenderResult<Self> {
        toml::from_str(input).map_err(|e| RenderError::config(e.to_string()))
    }

    /// Read and parse a config file
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Table options with unset keys at their defaults
    pub fn table_options(&self) -> TableOptions {
        let defaults = TableOptions::default();
        TableOptions {
            caption: self.caption.clone().unwrap_or(defaults.caption),
            label: self.label.clone().unwrap_or(defaults.label),
            position: self.position.unwrap_or(defaults.position),
            add_borders: self.borders.unwrap_or(defaults.add_borders),
        }
    }

    /// Parse the declared merges
    pub fn merge_regions(&self) -> RenderResult<Vec<MergeRegion>> {
        self.merges.iter().map(|m| MergeRegion::from_range(m)).collect()
    }
}
