//! Show the distance between two texts.
//!
//! The texts are given directly on the command line, or read from files with `--files`. The
//! distance is printed on stdout, so that it may be used by other tools.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use colored::Colorize;

use seqdist::error::DistanceError;

mod common;
#[macro_use]
#[allow(unused_macros)]
mod logging;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Calculate the distance between two texts.",
    long_about = None,
    propagate_version = true)]
struct Cli {
    /// The first text.
    #[arg(long_help, value_name = "TEXT 1", help = "The first text (or file)")]
    text_1: String,

    /// The second text.
    #[arg(long_help, value_name = "TEXT 2", help = "The second text (or file)")]
    text_2: String,

    /// Treat the arguments as paths to files containing the texts.
    #[arg(long_help, short, long, help = "Read the texts from files")]
    files: bool,

    /// The configuration file to use.
    #[arg(long_help, short, long, value_name = "FILE", help = "The configuration file")]
    config_file: Option<PathBuf>,

    /// The distance strategy to use (overrides the configuration).
    #[arg(
        long_help,
        short,
        long,
        value_name = "STRATEGY",
        help = "The distance strategy to use (lcs, hamming)"
    )]
    strategy: Option<String>,

    /// The unit in which the texts are compared (overrides the configuration).
    #[arg(
        long_help,
        short,
        long,
        value_name = "UNIT",
        help = "The unit to compare texts in (chars, bytes, lines)"
    )]
    unit: Option<String>,

    /// Display the parameters and lengths of the texts.
    #[arg(long_help, short, long, help = "Be more verbose")]
    verbose: bool,
}

/// Run the distance calculation tool.
fn run(
    text_1: &str,
    text_2: &str,
    files: bool,
    config_file: Option<&Path>,
    strategy: Option<&str>,
    unit: Option<&str>,
    verbose: bool,
) -> Result<(), DistanceError> {
    let config = common::resolve_config(config_file, strategy, unit)?;

    let (text_1, text_2) = if files {
        (
            common::read_text(Path::new(text_1))?,
            common::read_text(Path::new(text_2))?,
        )
    } else {
        (text_1.to_string(), text_2.to_string())
    };

    if verbose {
        println_verbose!("Strategy: {}", config.strategy);
        println_verbose!("Unit: {}", config.unit);
        println_verbose!("Length of text 1: {}", config.unit.len(&text_1));
        println_verbose!("Length of text 2: {}", config.unit.len(&text_2));
    }

    let distance = config
        .unit
        .measure(config.strategy.as_ref(), &text_1, &text_2)?;
    println!("{}", distance);

    Ok(())
}

fn main() -> ExitCode {
    common::reset_sigpipe();
    let cli = Cli::parse();

    match run(
        &cli.text_1,
        &cli.text_2,
        cli.files,
        cli.config_file.as_deref(),
        cli.strategy.as_deref(),
        cli.unit.as_deref(),
        cli.verbose,
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            println_error!(err);
            ExitCode::FAILURE
        }
    }
}
