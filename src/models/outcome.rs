//! Scenario outcome models
//!
//! Defines per-scenario results, verdicts and the run summary.

use std::fmt;

use super::Scenario;

/// Scenario execution status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioStatus {
    /// Every request behaved as the scenario expects
    Pass,
    /// The server answered with an unexpected status
    Fail,
    /// The server could not be reached or the exchange broke off
    Error,
}

impl ScenarioStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            ScenarioStatus::Pass => "✓",
            ScenarioStatus::Fail => "✗",
            ScenarioStatus::Error => "!",
        }
    }
}

impl fmt::Display for ScenarioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioStatus::Pass => write!(f, "PASS"),
            ScenarioStatus::Fail => write!(f, "FAIL"),
            ScenarioStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Judgment of an observed status against the expected one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn judge(expected: u16, actual: u16) -> Self {
        if expected == actual {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "CORRECT"),
            Verdict::Incorrect => write!(f, "INCORRECT"),
        }
    }
}

/// Result of a single scenario
#[derive(Clone, Debug)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub status: ScenarioStatus,
    pub duration_ms: u64,
    /// Status code of the response that ended the scenario, if any
    pub status_code: Option<u16>,
    pub verdict: Option<Verdict>,
    pub message: Option<String>,
}

impl ScenarioResult {
    pub fn pass(scenario: Scenario, duration_ms: u64) -> Self {
        Self {
            scenario,
            status: ScenarioStatus::Pass,
            duration_ms,
            status_code: None,
            verdict: None,
            message: None,
        }
    }

    pub fn fail(scenario: Scenario, duration_ms: u64, message: impl Into<String>) -> Self {
        Self {
            scenario,
            status: ScenarioStatus::Fail,
            duration_ms,
            status_code: None,
            verdict: None,
            message: Some(message.into()),
        }
    }

    pub fn error(scenario: Scenario, duration_ms: u64, error: impl Into<String>) -> Self {
        Self {
            scenario,
            status: ScenarioStatus::Error,
            duration_ms,
            status_code: None,
            verdict: None,
            message: Some(error.into()),
        }
    }

    pub fn with_status_code(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Attach a verdict; a correct verdict turns the result into a pass
    pub fn with_verdict(mut self, verdict: Verdict) -> Self {
        self.verdict = Some(verdict);
        self.status = match verdict {
            Verdict::Correct => ScenarioStatus::Pass,
            Verdict::Incorrect => ScenarioStatus::Fail,
        };
        self
    }
}

impl fmt::Display for ScenarioResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms]",
            self.status.symbol(),
            self.scenario,
            self.duration_ms
        )?;
        if let Some(msg) = &self.message {
            write!(f, " - {msg}")?;
        }
        Ok(())
    }
}

/// Summary of a full run
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub base_url: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub total_duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

impl RunSummary {
    pub fn new(base_url: impl Into<String>, results: Vec<ScenarioResult>) -> Self {
        let count = |status: ScenarioStatus| results.iter().filter(|r| r.status == status).count();

        Self {
            base_url: base_url.into(),
            total: results.len(),
            passed: count(ScenarioStatus::Pass),
            failed: count(ScenarioStatus::Fail),
            errors: count(ScenarioStatus::Error),
            total_duration_ms: results.iter().map(|r| r.duration_ms).sum(),
            results,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }
}
