//! Common functions and elements used by the binaries in the seqdist toolchain.

use std::{fs, path::Path};

use seqdist::{
    config::Config, distance_strategy, error, error::DistanceError, sequence::Unit,
};

// Reset SIGPIPE, so that the output of may be piped to other stuff.
// See https://stackoverflow.com/q/65755853/.
pub fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

/// Build the configuration to use.
///
/// Values given on the command line take precedence over the configuration file, which takes
/// precedence over the defaults.
pub fn resolve_config(
    config_file: Option<&Path>,
    strategy: Option<&str>,
    unit: Option<&str>,
) -> Result<Config, DistanceError> {
    let mut config = match config_file {
        Some(file) => Config::load(file)?,
        None => Config::default(),
    };

    if let Some(strategy) = strategy {
        config.strategy = distance_strategy::from_name(strategy)?;
    }
    if let Some(unit) = unit {
        config.unit = unit.parse::<Unit>()?;
    }

    Ok(config)
}

/// Read a text file.
pub fn read_text(file: &Path) -> Result<String, DistanceError> {
    fs::read_to_string(file)
        .map_err(|err| error!("could not read file '{}': {}.", file.display(), err))
}
