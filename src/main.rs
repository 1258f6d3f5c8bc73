use clap::Parser;
use log::info;

use toolbelt::casing;
use toolbelt::memoizer::memoize;
use toolbelt::number;

mod cli;
mod logging;

use cli::{Args, Command};

/// Applies `transform` to every input, computing each distinct input once.
fn transform_all<F>(inputs: &[String], transform: F) -> Vec<String>
where
    F: Fn(String) -> String + 'static,
{
    let mut transform = memoize(transform);
    let lines = inputs
        .iter()
        .map(|input| transform.call(input.clone()))
        .collect();
    info!(
        "transformed {} inputs ({} distinct)",
        inputs.len(),
        transform.cache().len()
    );
    lines
}

fn run(command: &Command) -> Vec<String> {
    match command {
        Command::Case { style, inputs } => {
            let style = *style;
            info!("converting to {} case", style);
            transform_all(inputs, move |text| style.apply(&text))
        }
        Command::Words { inputs } => {
            transform_all(inputs, |text| casing::words(&text).join(" "))
        }
        Command::Number { integer, inputs } => {
            let integer = *integer;
            transform_all(inputs, move |text| {
                let value = number::to_number(&text);
                let value = if integer {
                    number::to_integer(value)
                } else {
                    value
                };
                number::to_text(value)
            })
        }
    }
}

fn main() {
    // parse CLI arguments
    let args = Args::parse();

    // set up logging
    logging::setup_logger(args.verbosity, args.log_output.clone());

    for line in run(&args.command) {
        println!("{}", line);
    }
}
