//! Console report writer
//!
//! Every line the probe shows the user goes through [`Console`], so runs
//! can be captured in a buffer as easily as printed to stdout.

use std::fmt::Display;
use std::io::{self, Write};

use crate::models::Scenario;

/// Line-oriented writer for the human-readable report
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a single line
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Write a `label: value` line
    pub fn field(&mut self, label: &str, value: impl Display) -> io::Result<()> {
        self.line(format_args!("{label}: {value}"))
    }

    /// Write the banner that opens a scenario
    pub fn scenario_header(&mut self, scenario: Scenario) -> io::Result<()> {
        self.line(format_args!(
            "=== TEST {}: {} ===",
            scenario.number(),
            scenario.name()
        ))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
