//! Calendar configuration file support.
//!
//! This module provides utilities for reading calendar view configuration
//! from TOML configuration files.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{CalendarError, CalendarResult};
use crate::preprocessing::pipeline::{ParseFailurePolicy, PrepareConfig};
use crate::services::layout::GridGeometry;

/// Calendar configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub pipeline: PipelineSettings,
}

/// Week-grid geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    #[serde(default = "default_origin_hour")]
    pub origin_hour: u32,
    #[serde(default = "default_px_per_hour")]
    pub px_per_hour: f64,
}

/// Feed preparation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSettings {
    #[serde(default = "default_validate")]
    pub validate: bool,
    #[serde(default)]
    pub skip_unparseable: bool,
}

fn default_origin_hour() -> u32 {
    9
}

fn default_px_per_hour() -> f64 {
    80.0
}

fn default_validate() -> bool {
    true
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            origin_hour: default_origin_hour(),
            px_per_hour: default_px_per_hour(),
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            validate: default_validate(),
            skip_unparseable: false,
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            grid: GridSettings::default(),
            pipeline: PipelineSettings::default(),
        }
    }
}

impl CalendarConfig {
    /// Load calendar configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(CalendarConfig)` if successful
    /// * `Err(CalendarError)` if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> CalendarResult<Self> {
        debug!("loading calendar config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse calendar configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> CalendarResult<Self> {
        toml::from_str(contents)
            .map_err(|e| CalendarError::Configuration(format!("invalid calendar config: {}", e)))
    }

    /// Grid geometry derived from the `[grid]` section.
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry {
            origin_hour: self.grid.origin_hour,
            px_per_hour: self.grid.px_per_hour,
        }
    }

    /// Pipeline configuration derived from the `[pipeline]` section.
    pub fn prepare_config(&self) -> PrepareConfig {
        PrepareConfig {
            validate: self.pipeline.validate,
            on_parse_failure: if self.pipeline.skip_unparseable {
                ParseFailurePolicy::Skip
            } else {
                ParseFailurePolicy::Halt
            },
        }
    }
}
