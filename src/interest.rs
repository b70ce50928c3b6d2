//! Simple-interest calculator
//!
//! `interest = principal * rate * time / 100`, with rate as a percentage
//! and time in years. Inputs are not range-checked; only NaN and infinities
//! are refused.

use serde::Serialize;
use std::fmt;
use std::io::Write;

use crate::commands::OutputFormat;
use crate::common::{Error, Result};

/// Inputs and the derived interest
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimpleInterest {
    pub principal: f64,
    pub rate: f64,
    pub time: f64,
    pub interest: f64,
}

impl SimpleInterest {
    /// Render the four output lines, without a trailing newline
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SimpleInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Principal: {:.2}", self.principal)?;
        writeln!(f, "Rate: {:.2}%", self.rate)?;
        writeln!(f, "Time: {:.2} years", self.time)?;
        write!(f, "Simple Interest: {:.2}", self.interest)
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::non_finite(field, value))
    }
}

/// Compute simple interest
pub fn calculate(principal: f64, rate: f64, time: f64) -> Result<SimpleInterest> {
    let principal = finite("principal", principal)?;
    let rate = finite("rate", rate)?;
    let time = finite("time", time)?;

    let interest = finite("interest", (principal * rate * time) / 100.0)?;
    tracing::debug!(principal, rate, time, interest, "computed simple interest");

    Ok(SimpleInterest {
        principal,
        rate,
        time,
        interest,
    })
}

/// Compute and write the result in the requested format
pub fn print_interest<W: Write>(
    writer: &mut W,
    principal: f64,
    rate: f64,
    time: f64,
    format: OutputFormat,
) -> Result<()> {
    let result = calculate(principal, rate, time)?;
    match format {
        OutputFormat::Text => writeln!(writer, "{result}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, &result)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
