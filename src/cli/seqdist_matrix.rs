//! Show the pairwise distances between files.
//!
//! Every unordered pair of files is compared, in parallel; the results are printed on stdout in
//! CSV format (`first,second,distance`).

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use colored::Colorize;

use seqdist::{error::DistanceError, matrix};

mod common;
#[macro_use]
#[allow(unused_macros)]
mod logging;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Calculate the pairwise distances between files.",
    long_about = None,
    propagate_version = true)]
struct Cli {
    /// The files to compare.
    #[arg(value_name = "FILE", action = ArgAction::Append, required = true)]
    files: Vec<PathBuf>,

    /// The configuration file to use.
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// The distance strategy to use (overrides the configuration).
    #[arg(short = 's', long = "strategy", value_name = "STRATEGY")]
    strategy: Option<String>,

    /// The unit in which the files are compared (overrides the configuration).
    #[arg(short = 'u', long = "unit", value_name = "UNIT")]
    unit: Option<String>,

    /// Omit the CSV header.
    #[arg(short = 'n', long = "no-header")]
    no_header: bool,
}

/// Run the pairwise distance tool.
fn run(
    files: &[PathBuf],
    config_file: Option<&Path>,
    strategy: Option<&str>,
    unit: Option<&str>,
    no_header: bool,
) -> Result<(), DistanceError> {
    let config = common::resolve_config(config_file, strategy, unit)?;

    if files.len() < 2 {
        println_warning!("fewer than two files given; there is nothing to compare.");
    }

    let texts = files
        .iter()
        .map(|file| common::read_text(file))
        .collect::<Result<Vec<String>, DistanceError>>()?;

    println_info!(
        "Comparing {} files ({}, in {})...",
        files.len(),
        config.strategy,
        config.unit
    );
    let distances = matrix::pairwise(config.strategy.as_ref(), config.unit, &texts)?;

    if !no_header {
        println!("first,second,distance");
    }
    distances.iter().for_each(|pair| {
        println!(
            "{},{},{}",
            files[pair.first].display(),
            files[pair.second].display(),
            pair.distance
        );
    });

    Ok(())
}

fn main() -> ExitCode {
    common::reset_sigpipe();
    let cli = Cli::parse();

    match run(
        &cli.files,
        cli.config_file.as_deref(),
        cli.strategy.as_deref(),
        cli.unit.as_deref(),
        cli.no_header,
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            println_error!(err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }
}
