//! Arithmetic snippets - a Fibonacci printer and a simple-interest calculator
//!
//! Each program computes its result in this library and writes formatted
//! text (or JSON) to stdout.

pub mod cli;
pub mod commands;
pub mod common;
pub mod fibonacci;
pub mod interest;

pub use common::{Error, Result};
pub use fibonacci::{Fibonacci, FibonacciSeries};
pub use interest::SimpleInterest;
