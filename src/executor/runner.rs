//! Scenario runner
//!
//! Drives any [`Scenario::plan`] against the configured base URL and writes
//! the human-readable report to a [`Console`].

use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::http::{HttpClient, HttpError, StatusLine};
use crate::models::{FailureReport, RunSummary, Scenario, ScenarioResult, Verdict};
use crate::output::Console;
use crate::utils::Timer;

/// Sequential runner for the probe scenarios
pub struct ScenarioRunner<W: Write> {
    base_url: String,
    timeout_secs: u64,
    console: Console<W>,
}

impl<W: Write> ScenarioRunner<W> {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64, console: Console<W>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs,
            console,
        }
    }

    pub fn from_config(config: &AppConfig, console: Console<W>) -> Self {
        Self::new(config.base_url.clone(), config.timeout_secs, console)
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    /// Run a single scenario.
    ///
    /// Server and transport failures are reported and folded into the
    /// returned result. Only errors the scenario cannot attribute to the
    /// server (bad URL, broken console) come back as `Err`.
    pub async fn run_scenario(&mut self, scenario: Scenario) -> Result<ScenarioResult> {
        self.console.scenario_header(scenario)?;

        let plan = scenario.plan();
        let timer = Timer::start(scenario.to_string());

        // Dropped on every return path below
        let client = HttpClient::with_timeout(self.timeout_secs)?.base_url(self.base_url.as_str());
        let mut last_status = None;

        for step in &plan.steps {
            let request = step.to_request();

            match step.label {
                Some(label) => self.console.line(label)?,
                None => self.console.field(
                    &format!("Sending {} to", step.method),
                    client.build_url(&request.url),
                )?,
            }

            if step.echo_body {
                if let Some(body) = &request.body {
                    self.console.field("Request body", body)?;
                }
            }

            match client.send(&request).await {
                Ok(response) => {
                    debug!(
                        "{} {} -> {} ({:?}) in {}ms",
                        step.method,
                        request.url,
                        response.status_code,
                        response.content_type(),
                        response.duration_ms
                    );
                    self.console.field("Response", &response.body)?;
                    if plan.announce_success {
                        self.console.line("Status: SUCCESS")?;
                    }
                    last_status = Some(response.status_code);
                }
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => {
                    let result =
                        self.report_failure(scenario, &plan.failure, &e, timer.elapsed_ms())?;
                    info!("{}", result);
                    return Ok(result);
                }
            }
        }

        let duration_ms = timer.stop();
        let mut result = match plan.failure.expected_status {
            // No verdict line on this path; the summary still records it
            Some(expected) => ScenarioResult::fail(
                scenario,
                duration_ms,
                format!("request accepted, expected status {expected}"),
            ),
            None => ScenarioResult::pass(scenario, duration_ms),
        };
        if let Some(code) = last_status {
            result = result.with_status_code(code);
        }

        info!("{}", result);
        Ok(result)
    }

    fn report_failure(
        &mut self,
        scenario: Scenario,
        report: &FailureReport,
        error: &HttpError,
        duration_ms: u64,
    ) -> Result<ScenarioResult> {
        self.console.field(report.error_label, error)?;

        let Some(code) = error.status_code() else {
            warn!("{} could not reach the server: {}", scenario, error);
            return Ok(ScenarioResult::error(scenario, duration_ms, error.to_string()));
        };

        if report.status_code {
            self.console.field("Status code", StatusLine(code))?;
        }
        if report.error_body {
            self.console
                .field("Server response", error.body().unwrap_or_default())?;
        }
        if report.status_description {
            self.console
                .field("Status description", error.reason().unwrap_or_default())?;
        }

        let mut result =
            ScenarioResult::fail(scenario, duration_ms, error.to_string()).with_status_code(code);

        if let Some(expected) = report.expected_status {
            let verdict = Verdict::judge(expected, code);
            self.console.field("Verdict", verdict)?;
            result = result.with_verdict(verdict);
        }

        Ok(result)
    }

    /// Run the given scenarios in order.
    ///
    /// The first `Err` from a scenario ends the run; the scenarios after it
    /// are not attempted.
    pub async fn run(&mut self, scenarios: &[Scenario]) -> Result<RunSummary> {
        info!(
            "Running {} scenario(s) against {}",
            scenarios.len(),
            self.base_url
        );

        let mut results = Vec::new();
        for &scenario in scenarios {
            results.push(self.run_scenario(scenario).await?);
        }

        let summary = RunSummary::new(self.base_url.clone(), results);
        info!(
            "Run completed in {}ms - Pass: {}/{} ({:.1}%)",
            summary.total_duration_ms,
            summary.passed,
            summary.total,
            summary.pass_rate()
        );

        Ok(summary)
    }
}
