//! Configuration definition & utilities.
//!
//! A configuration names the distance strategy and the unit to use when comparing texts. It is
//! stored as a TOML file, for example:
//!
//! ```toml
//! unit = "lines"
//!
//! [strategy]
//! kind = "hamming"
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    distance_strategy::{self, DistanceStrategy},
    error::DistanceError,
    sequence::Unit,
};

/// A configuration for the distance tools.
#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    /// The unit in which texts are split before being compared.
    #[serde(default = "Config::default_unit")]
    pub unit: Unit,
    /// The distance strategy to use.
    #[serde(default = "Config::default_strategy")]
    pub strategy: Box<dyn DistanceStrategy>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            unit: Self::default_unit(),
            strategy: Self::default_strategy(),
        }
    }
}

impl Config {
    /// The default unit.
    pub const fn default_unit() -> Unit {
        Unit::Chars
    }
    /// The default distance strategy.
    pub fn default_strategy() -> Box<dyn DistanceStrategy> {
        dyn_clone::clone_box(distance_strategy::LCS)
    }

    /// Save a configuration to a file.
    ///
    /// # Arguments
    /// * `file` - The file to save the configuration to.
    pub fn save(&self, file: &Path) -> Result<(), DistanceError> {
        let config_toml = toml::to_string(&self)
            .map_err(|err| error!("failed to serialize config TOML: {}.", err))?;

        fs::write(file, config_toml).map_err(|err| {
            error!(
                "could not save config to file {}: {}.",
                file.display(),
                err
            )
        })
    }

    /// Load a configuration from file.
    ///
    /// # Arguments
    /// * `file` - The file to load the configuration from.
    pub fn load(file: &Path) -> Result<Self, DistanceError> {
        let config_toml = fs::read_to_string(file).map_err(|err| {
            error!(
                "failed to read configuration from {}: {}.",
                file.display(),
                err
            )
        })?;

        Self::parse(&config_toml)
    }

    /// Parse a configuration from a TOML string.
    pub fn parse(config_toml: &str) -> Result<Self, DistanceError> {
        toml::from_str(config_toml)
            .map_err(|err| error!("failed to deserialize config TOML: {}.", err))
    }
}
