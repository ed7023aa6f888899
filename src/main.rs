//! Rust Velocity Engine CLI
//!
//! Command-line interface for enforcing velocity limits on account load
//! requests read from a newline-delimited JSON file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- input.txt > output.txt
//! cargo run -- --config config.json input.txt
//! cargo run -- --output output.txt --strategy async input.txt
//! ```
//!
//! The program reads load records from the input file, evaluates them
//! through the decision engine, and writes one JSON decision per
//! non-duplicate event to stdout or to the selected output file.
//!
//! # Output selection
//!
//! `--output` wins over the config file's `outputfile`; with neither set,
//! decisions go to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, unreadable config, etc.)

use rust_velocity_engine::cli;
use rust_velocity_engine::config::Config;
use rust_velocity_engine::strategy;
use rust_velocity_engine::types::VelocityError;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process;

fn run() -> Result<(), VelocityError> {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Load configuration, falling back to shipped defaults without a file
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // CLI --output overrides the config file's outputfile
    let output_path: Option<PathBuf> = args
        .output
        .clone()
        .or_else(|| config.output_file().map(PathBuf::from));

    let strategy = strategy::create_strategy(args.strategy);

    match output_path {
        Some(path) => {
            let mut file = File::create(&path)?;
            strategy.process(&args.input_file, config.limits(), &mut file)?;
            file.flush()?;
        }
        None => {
            let mut stdout = std::io::stdout();
            strategy.process(&args.input_file, config.limits(), &mut stdout)?;
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
