//! Data models for the HTTP probe
//!
//! Scenario definitions and the results they produce.

mod outcome;
mod scenario;

pub use outcome::{RunSummary, ScenarioResult, ScenarioStatus, Verdict};
pub use scenario::{FailureReport, Scenario};
