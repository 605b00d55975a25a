//! Optional TOML configuration.
//!
//! CLI flags override file values, which override built-in defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::{RecommendError, Result};
use crate::planner::DEFAULT_TIMEFRAME_MONTHS;
use crate::resources::{ResourceOverrides, ResourceTable};

/// How an out-of-range `top_n` is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopNPolicy {
    /// Clamp into `1..=catalog size`.
    #[default]
    Clamp,
    /// Reject with `InvalidTopN`.
    Strict,
}

impl TopNPolicy {
    pub fn resolve(self, requested: usize, catalog_size: usize) -> Result<usize> {
        match self {
            TopNPolicy::Clamp => Ok(requested.clamp(1, catalog_size.max(1))),
            TopNPolicy::Strict if requested == 0 || requested > catalog_size => {
                Err(RecommendError::InvalidTopN {
                    requested,
                    catalog_size,
                })
            }
            TopNPolicy::Strict => Ok(requested),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub resources: ResourceOverrides,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_timeframe_months")]
    pub timeframe_months: u32,
    #[serde(default)]
    pub top_n_policy: TopNPolicy,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            timeframe_months: default_timeframe_months(),
            top_n_policy: TopNPolicy::default(),
        }
    }
}

fn default_top_n() -> usize {
    5
}
fn default_timeframe_months() -> u32 {
    DEFAULT_TIMEFRAME_MONTHS
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| RecommendError::io(path, err))?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| RecommendError::Config(err.to_string()))
    }

    pub fn resource_table(&self) -> ResourceTable {
        ResourceTable::default().with_overrides(self.resources.clone())
    }
}
