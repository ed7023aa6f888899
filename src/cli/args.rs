use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Enforce velocity limits on a stream of account load requests
#[derive(Parser, Debug)]
#[command(name = "velocity-engine")]
#[command(about = "Enforce velocity limits on account load requests", long_about = None)]
pub struct CliArgs {
    /// Input file path containing newline-delimited JSON load records
    #[arg(value_name = "INPUT", help = "Path to the input file")]
    pub input_file: PathBuf,

    /// Optional configuration file with limits and output selection
    #[arg(
        long = "config",
        value_name = "CONFIG",
        help = "Path to a JSON config file (defaults apply when absent)"
    )]
    pub config: Option<PathBuf>,

    /// Output file path, overriding the config file's outputfile
    #[arg(
        long = "output",
        value_name = "OUTPUT",
        help = "Write decisions to this file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    /// I/O strategy to use for reading the input
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "I/O strategy: 'sync' for blocking reads or 'async' for tokio file I/O"
    )]
    pub strategy: StrategyType,
}

/// Available I/O strategies for input processing
///
/// Both strategies evaluate events in strict file order; they differ only
/// in how the input file is read.
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}
