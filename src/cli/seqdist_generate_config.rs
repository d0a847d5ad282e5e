//! Generate seqdist configurations interactively.
//!
//! This binary helps create configuration files without having to remember the format of the
//! configuration.

use std::{io, path::PathBuf, process::ExitCode};

use colored::Colorize;

#[allow(dead_code)]
mod common;
#[macro_use]
#[allow(unused_macros)]
mod logging;

use seqdist::{
    config::Config,
    distance_strategy::{self, DistanceStrategy},
    error,
    error::DistanceError,
    sequence::Unit,
};

/// Get (and parse) some input from `stdin`.
///
/// Ask a question and parse some input. The input will be passed to a conversion function, and if
/// it is empty a default value will be used instead. A printable default is supplied to be shown
/// to the user.
fn get_input<T, F>(
    question: &str,
    convert: F,
    default: T,
    printable_default: &str,
) -> Result<T, DistanceError>
where
    T: Clone,
    F: Fn(&str) -> Option<T>,
{
    let stdin = io::stdin();

    loop {
        let mut buffer = String::new();

        print_info!("{}? [default: {}] > ", question, printable_default);
        let read = stdin
            .read_line(&mut buffer)
            .map_err(|err| error!("could not read value from stdin: {}", err))?;
        if read == 0 {
            // End of input; stop asking.
            break Ok(default.clone());
        }

        // Remove the trailing newline.
        let buffer = buffer.trim().to_string();

        if buffer.is_empty() {
            break Ok(default.clone());
        }
        match convert(&buffer) {
            Some(choice) => break Ok(choice),
            None => println_warning!("invalid value '{}'.", buffer),
        }
    }
}

/// Generate a configuration interactively, through stdin.
fn generate_config() -> Result<(Config, PathBuf), DistanceError> {
    let default_config_file_name = PathBuf::from("seqdist.toml");
    let default_strategy = Config::default_strategy();
    let default_unit = Config::default_unit();

    let config_file_name = get_input(
        "Configuration file name",
        |x| Some(x.to_string().into()),
        default_config_file_name.clone(),
        &default_config_file_name.display().to_string(),
    )?;
    let strategy: Box<dyn DistanceStrategy> = get_input(
        &format!(
            "Distance strategy ({})",
            distance_strategy::all()
                .map(|strategy| strategy.name().to_string())
                .join(", ")
        ),
        |x| distance_strategy::from_name(x).ok(),
        default_strategy.clone(),
        &default_strategy.to_string(),
    )?;
    let unit = get_input(
        "Unit (chars, bytes, lines)",
        |x| x.parse::<Unit>().ok(),
        default_unit,
        &default_unit.to_string(),
    )?;

    Ok((Config { unit, strategy }, config_file_name))
}

fn main() -> ExitCode {
    common::reset_sigpipe();
    let config_file: Result<PathBuf, DistanceError> = generate_config()
        .and_then(|(config, config_file)| config.save(&config_file).map(|()| config_file));

    match config_file {
        Ok(config_file) => {
            println_info!(
                "Done! The configuration is saved in '{}'.",
                config_file.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            println_error!(err);
            ExitCode::FAILURE
        }
    }
}
