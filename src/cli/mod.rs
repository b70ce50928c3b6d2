//! CLI command handling
//!
//! Resolves inputs (flag, then config, then built-in default) and writes
//! the result.

use std::io::Write;

use crate::commands::{Commands, FibonacciArgs, InterestArgs};
use crate::common::config::Config;
use crate::common::Result;
use crate::{fibonacci, interest};

/// Dispatch a CLI command, writing its output to `out`
pub fn dispatch<W: Write>(command: Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Fibonacci(args) => run_fibonacci(args, out),
        Commands::Interest(args) => run_interest(args, out),
    }
}

pub fn run_fibonacci<W: Write>(args: FibonacciArgs, out: &mut W) -> Result<()> {
    let config = Config::load(args.common.config.as_deref())?;
    let terms = args.terms.unwrap_or(config.fibonacci.terms);
    tracing::debug!(terms, from_flag = args.terms.is_some(), "resolved fibonacci input");

    fibonacci::print_series(out, terms, args.common.format)
}

pub fn run_interest<W: Write>(args: InterestArgs, out: &mut W) -> Result<()> {
    let config = Config::load(args.common.config.as_deref())?.interest;
    let principal = args.principal.unwrap_or(config.principal);
    let rate = args.rate.unwrap_or(config.rate);
    let time = args.time.unwrap_or(config.time);
    tracing::debug!(principal, rate, time, "resolved interest inputs");

    interest::print_interest(out, principal, rate, time, args.common.format)
}
