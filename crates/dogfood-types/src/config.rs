//! Order configuration
//!
//! Defaults describe a shelter of 30 dogs eating 10/20/30 lbs per month by
//! size, ordering 20% over need. Overrides replace individual defaults and
//! can be read from TOML or JSON.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CONSUMPTION_SMALL: f64 = 10.0;
pub const DEFAULT_CONSUMPTION_MEDIUM: f64 = 20.0;
pub const DEFAULT_CONSUMPTION_LARGE: f64 = 30.0;
pub const DEFAULT_MAX_DOGS: f64 = 30.0;
pub const DEFAULT_OVER_ORDER_PERCENT: f64 = 20.0;

pub const MIN_CONSUMPTION_SMALL: f64 = 5.0;
pub const MIN_CONSUMPTION_MEDIUM: f64 = 10.0;
pub const MIN_CONSUMPTION_LARGE: f64 = 15.0;

/// Effective parameters of one order calculation.
///
/// Values are kept as `f64` so that a non-integral `max_dogs` or
/// `over_order_percent` reaches validation instead of being truncated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderConfig {
    /// lbs a small dog eats per month, min 5
    #[serde(default = "default_consumption_small")]
    pub consumption_small: f64,

    /// lbs a medium dog eats per month, min 10
    #[serde(default = "default_consumption_medium")]
    pub consumption_medium: f64,

    /// lbs a large dog eats per month, min 15
    #[serde(default = "default_consumption_large")]
    pub consumption_large: f64,

    /// Shelter capacity
    #[serde(default = "default_max_dogs")]
    pub max_dogs: f64,

    /// % the order is increased over current need
    #[serde(default = "default_over_order_percent")]
    pub over_order_percent: f64,
}

fn default_consumption_small() -> f64 {
    DEFAULT_CONSUMPTION_SMALL
}

fn default_consumption_medium() -> f64 {
    DEFAULT_CONSUMPTION_MEDIUM
}

fn default_consumption_large() -> f64 {
    DEFAULT_CONSUMPTION_LARGE
}

fn default_max_dogs() -> f64 {
    DEFAULT_MAX_DOGS
}

fn default_over_order_percent() -> f64 {
    DEFAULT_OVER_ORDER_PERCENT
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            consumption_small: default_consumption_small(),
            consumption_medium: default_consumption_medium(),
            consumption_large: default_consumption_large(),
            max_dogs: default_max_dogs(),
            over_order_percent: default_over_order_percent(),
        }
    }
}

impl OrderConfig {
    /// Apply overrides field by field; unset fields keep their current value.
    pub fn merged(&self, overrides: &ConfigOverrides) -> Self {
        Self {
            consumption_small: overrides.consumption_small.unwrap_or(self.consumption_small),
            consumption_medium: overrides
                .consumption_medium
                .unwrap_or(self.consumption_medium),
            consumption_large: overrides.consumption_large.unwrap_or(self.consumption_large),
            max_dogs: overrides.max_dogs.unwrap_or(self.max_dogs),
            over_order_percent: overrides
                .over_order_percent
                .unwrap_or(self.over_order_percent),
        }
    }

    /// Defaults with `overrides` applied, or plain defaults when there are none.
    pub fn resolve(overrides: Option<&ConfigOverrides>) -> Self {
        match overrides {
            Some(o) => Self::default().merged(o),
            None => Self::default(),
        }
    }
}

impl fmt::Display for OrderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dog Food Order Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(f, "Small dog (lbs/month):  {}", self.consumption_small)?;
        writeln!(f, "Medium dog (lbs/month): {}", self.consumption_medium)?;
        writeln!(f, "Large dog (lbs/month):  {}", self.consumption_large)?;
        writeln!(f, "Max dogs:               {}", self.max_dogs)?;
        writeln!(f, "Over-order:             {}%", self.over_order_percent)?;
        Ok(())
    }
}

/// Caller-supplied replacements for individual [`OrderConfig`] defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "consumptionSmall",
        alias = "lbsPerMonthSmall"
    )]
    pub consumption_small: Option<f64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "consumptionMedium",
        alias = "lbsPerMonthMedium"
    )]
    pub consumption_medium: Option<f64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "consumptionLarge",
        alias = "lbsPerMonthLarge"
    )]
    pub consumption_large: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "maxDogs")]
    pub max_dogs: Option<f64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "overOrderPercent",
        alias = "pctOverOrder"
    )]
    pub over_order_percent: Option<f64>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_consumption_small(mut self, lbs: f64) -> Self {
        self.consumption_small = Some(lbs);
        self
    }

    pub fn with_consumption_medium(mut self, lbs: f64) -> Self {
        self.consumption_medium = Some(lbs);
        self
    }

    pub fn with_consumption_large(mut self, lbs: f64) -> Self {
        self.consumption_large = Some(lbs);
        self
    }

    pub fn with_max_dogs(mut self, max_dogs: f64) -> Self {
        self.max_dogs = Some(max_dogs);
        self
    }

    pub fn with_over_order_percent(mut self, percent: f64) -> Self {
        self.over_order_percent = Some(percent);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load overrides from a `.toml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content)
    }
}
