//! Run summary formatter
//!
//! Renders a [`RunSummary`] as a table after the scenario report.

use crate::models::{RunSummary, ScenarioResult, ScenarioStatus};

/// Summary formatter
pub struct SummaryFormatter {
    colorize: bool,
}

impl SummaryFormatter {
    pub fn new() -> Self {
        Self { colorize: true }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format the run summary
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        self.format_summary_table(summary)
    }

    fn format_result_row(&self, result: &ScenarioResult) -> String {
        let status_str = if self.colorize {
            match result.status {
                ScenarioStatus::Pass => "\x1b[32m✓ PASS\x1b[0m",
                ScenarioStatus::Fail => "\x1b[31m✗ FAIL\x1b[0m",
                ScenarioStatus::Error => "\x1b[31m! ERROR\x1b[0m",
            }
        } else {
            match result.status {
                ScenarioStatus::Pass => "✓ PASS",
                ScenarioStatus::Fail => "✗ FAIL",
                ScenarioStatus::Error => "! ERROR",
            }
        };

        let code = result
            .status_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());

        let mut row = format!(
            "{:2}. {:30} {} {:>3} [{:>6}ms]",
            result.scenario.number(),
            result.scenario.name(),
            status_str,
            code,
            result.duration_ms
        );
        if let Some(verdict) = result.verdict {
            row.push_str(&format!(" {verdict}"));
        }
        row
    }

    fn format_summary_table(&self, summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        output.push_str(&format!(" Summary for {}\n", summary.base_url));
        output.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

        for result in &summary.results {
            output.push_str(&format!(" {}\n", self.format_result_row(result)));
        }

        output.push_str("──────────────────────────────────────────────────────────────\n");

        let fail_str = if self.colorize && summary.failed > 0 {
            format!("\x1b[31m{}\x1b[0m", summary.failed)
        } else {
            summary.failed.to_string()
        };

        output.push_str(&format!(
            " Total: {} | Pass: {} | Fail: {} | Error: {}\n",
            summary.total, summary.passed, fail_str, summary.errors
        ));
        output.push_str(&format!(
            " Pass Rate: {:.1}% | Duration: {}ms\n",
            summary.pass_rate(),
            summary.total_duration_ms
        ));

        output
    }
}

impl Default for SummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Scenario, Verdict};

    fn sample_summary() -> RunSummary {
        RunSummary::new(
            "http://localhost:8080/",
            vec![
                ScenarioResult::pass(Scenario::GetRequest, 12).with_status_code(200),
                ScenarioResult::error(Scenario::PostRequest, 1, "connection refused"),
            ],
        )
    }

    #[test]
    fn test_table_lists_every_scenario() {
        let output = SummaryFormatter::default()
            .no_color()
            .format_summary(&sample_summary());

        assert!(output.contains("Summary for http://localhost:8080/"));
        assert!(output.contains("GET request"));
        assert!(output.contains("✓ PASS 200"));
        assert!(output.contains("! ERROR   -"));
        assert!(output.contains("Total: 2 | Pass: 1 | Fail: 0 | Error: 1"));
    }

    #[test]
    fn test_verdict_shown_in_row() {
        let summary = RunSummary::new(
            "http://localhost:8080/",
            vec![ScenarioResult::fail(Scenario::UnsupportedMethod, 4, "rejected")
                .with_status_code(500)
                .with_verdict(Verdict::Incorrect)],
        );
        let output = SummaryFormatter::default().no_color().format_summary(&summary);

        assert!(output.contains("✗ FAIL 500"));
        assert!(output.contains("ms] INCORRECT"));
        assert!(output.contains("Total: 1 | Pass: 0 | Fail: 1 | Error: 0"));
    }
}
