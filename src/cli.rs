//! This module defines the command line interface (CLI) for the application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toolbelt::casing::Case;

#[derive(Parser, Debug)]
#[command(version, about = "Lodash-style string and number helpers", long_about = None)]
pub struct Args {
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbosity: u8,

    #[arg(
        long,
        short = 'l',
        value_name = "LOG_FILE",
        global = true,
        help = "Optional path to the log file. Defaults to stderr if not specified."
    )]
    pub log_output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert every input to the given case
    Case {
        #[arg(value_enum, help = "The target case")]
        style: Case,

        #[arg(value_name = "TEXT", required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },

    /// Split every input into space separated words
    Words {
        #[arg(value_name = "TEXT", required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },

    /// Coerce every input to a number
    Number {
        #[arg(long, help = "Truncate results to integers")]
        integer: bool,

        #[arg(value_name = "TEXT", required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },
}
