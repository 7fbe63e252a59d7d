//! Runs every pattern in one go.
//!
//! Usage: complete_oop_tour [config.toml] [--json]

use colored::Colorize;
use oop_basics::{run_tour, OopError, TourConfig};
use std::env;
use std::io;
use std::process;

#[derive(Debug, Default, PartialEq)]
struct Options {
    config_path: Option<String>,
    json: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options, OopError> {
    let mut options = Options::default();
    for arg in args {
        if arg == "--json" {
            options.json = true;
        } else if arg.starts_with('-') {
            return Err(OopError::Usage(format!("Unknown flag: {}", arg)));
        } else if let Some(first) = &options.config_path {
            return Err(OopError::Usage(format!(
                "Only one config file allowed, got '{}' and '{}'",
                first, arg
            )));
        } else {
            options.config_path = Some(arg);
        }
    }
    Ok(options)
}

fn run() -> Result<(), OopError> {
    let options = parse_args(env::args().skip(1))?;

    let config = match &options.config_path {
        Some(path) => TourConfig::load(path)?,
        None => TourConfig::default(),
    };
    colored::control::set_override(config.output.color);

    if options.json {
        let report = run_tour(&config, &mut io::sink())?;
        println!("{}", report.to_json()?);
    } else {
        run_tour(&config, &mut io::stdout().lock())?;
        println!("{}", "✓ Tour complete".green());
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("✗ {}", e).red());
        process::exit(1);
    }
}
