//! Fibonacci series printer
//!
//! Produces the first N terms of 0, 1, 1, 2, 3, 5, ... and renders them as
//! `Fibonacci Series up to N terms: f0, f1, ..., f(N-1)`.

use serde::Serialize;
use std::fmt;
use std::io::Write;

use crate::commands::OutputFormat;
use crate::common::{Error, Result};

/// Number of terms that fit in a `u64` (F(0) through F(93))
pub const MAX_TERMS: u32 = 94;

/// Iterator over the Fibonacci sequence, ending before the first term that
/// would overflow `u64`
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.current?;
        self.current = self.next;
        self.next = self.next.and_then(|next| value.checked_add(next));
        Some(value)
    }
}

/// The first `terms` Fibonacci numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FibonacciSeries {
    pub terms: u32,
    pub values: Vec<u64>,
}

impl FibonacciSeries {
    /// Render the single output line, without a trailing newline
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FibonacciSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fibonacci Series up to {} terms: ", self.terms)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Compute the first `terms` Fibonacci numbers
pub fn series(terms: u32) -> Result<FibonacciSeries> {
    if terms > MAX_TERMS {
        return Err(Error::FibonacciOverflow {
            terms,
            max: MAX_TERMS,
        });
    }

    let values: Vec<u64> = Fibonacci::new().take(terms as usize).collect();
    tracing::debug!(terms, last = ?values.last(), "computed fibonacci series");

    Ok(FibonacciSeries { terms, values })
}

/// Compute and write the series in the requested format
pub fn print_series<W: Write>(writer: &mut W, terms: u32, format: OutputFormat) -> Result<()> {
    let series = series(terms)?;
    match format {
        OutputFormat::Text => writeln!(writer, "{series}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, &series)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
