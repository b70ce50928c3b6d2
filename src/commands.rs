//! CLI command definitions
//!
//! Defines the clap arguments shared by the standalone programs and the
//! `snippets` umbrella binary.

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per run
    Json,
}

/// Options common to both programs
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file to read instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FibonacciArgs {
    /// Number of terms to print (default: 10, or the config value)
    #[arg(long, short = 'n')]
    pub terms: Option<u32>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InterestArgs {
    /// Principal amount (default: 5000.00)
    #[arg(long, short = 'p', allow_negative_numbers = true)]
    pub principal: Option<f64>,

    /// Annual rate in percent (default: 5.5)
    #[arg(long, short = 'r', allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Duration in years (default: 2.0)
    #[arg(long, short = 't', allow_negative_numbers = true)]
    pub time: Option<f64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the first N Fibonacci numbers
    #[command(alias = "fib")]
    Fibonacci(FibonacciArgs),

    /// Calculate simple interest
    #[command(alias = "si")]
    Interest(InterestArgs),
}
