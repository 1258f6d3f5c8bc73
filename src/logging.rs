//! Logger setup for the `toolbelt` binary.

use env_logger::{Builder, Target, DEFAULT_FILTER_ENV};
use log::LevelFilter;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Level filters: the `-v` level for this crate's modules, then the
/// `rust_log` directives, which win for every module they name.
fn filtered_builder(verbosity: u8, rust_log: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    builder.filter_module("toolbelt", level_for(verbosity));
    if let Some(directives) = rust_log {
        builder.parse_filters(directives);
    }
    builder
}

/// Sets up the logger from the `-v` count, `RUST_LOG` and an optional log file.
pub fn setup_logger(verbosity: u8, log_output: Option<PathBuf>) {
    let rust_log = std::env::var(DEFAULT_FILTER_ENV).ok();
    let mut builder = filtered_builder(verbosity, rust_log.as_deref());
    builder.format_timestamp(None);

    let target = match log_output {
        Some(log_path) => match File::create(&log_path) {
            Ok(file) => Target::Pipe(Box::new(file) as Box<dyn Write + Send>),
            Err(e) => {
                eprintln!(
                    "Could not create log file at {} ({}). Logging to stderr.",
                    log_path.display(),
                    e
                );
                Target::Stderr
            }
        },
        None => Target::Stderr,
    };
    builder.target(target);

    builder.init();
}
