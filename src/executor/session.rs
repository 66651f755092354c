//! Interactive session
//!
//! One full invocation: banner, scenarios, summary, top-level error
//! report and the exit prompt.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::error;

use super::ScenarioRunner;
use crate::config::AppConfig;
use crate::models::Scenario;
use crate::output::{Console, SummaryFormatter};
use crate::utils::wait_for_keypress;

/// Options for a session
#[derive(Clone, Debug)]
pub struct SessionOptions {
    pub scenarios: Vec<Scenario>,
    pub colorize: bool,
    pub pause: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            scenarios: Scenario::all(),
            colorize: true,
            pause: true,
        }
    }
}

/// Run a session and hand the writer back.
///
/// A failure escaping the runner is printed and the session still reaches
/// the exit prompt. Only a broken `out`/`input` makes this return `Err`.
pub async fn run_session<R: BufRead, W: Write>(
    config: &AppConfig,
    options: &SessionOptions,
    input: &mut R,
    out: W,
) -> Result<W> {
    let mut console = Console::new(out);
    console.line("Testing HTTP server...")?;

    let mut runner = ScenarioRunner::from_config(config, console);
    let outcome = runner.run(&options.scenarios).await;
    let mut console = runner.into_console();

    match outcome {
        Ok(summary) => {
            let mut formatter = SummaryFormatter::new();
            if !options.colorize {
                formatter = formatter.no_color();
            }
            console.line(formatter.format_summary(&summary))?;
        }
        Err(e) => {
            error!("Run aborted: {:#}", e);
            console.field("Error while testing", format_args!("{e:#}"))?;
        }
    }

    let mut out = console.into_inner();
    if options.pause {
        wait_for_keypress(input, &mut out)?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::mock_server::{refused_base_url, MockResponse, MockServer};
    use crate::utils::EXIT_PROMPT;
    use std::io::Cursor;

    fn config(base_url: String) -> AppConfig {
        AppConfig {
            base_url,
            timeout_secs: 5,
            ..Default::default()
        }
    }

    fn options() -> SessionOptions {
        SessionOptions {
            colorize: false,
            ..Default::default()
        }
    }

    async fn session(config: &AppConfig, options: &SessionOptions) -> String {
        let mut input = Cursor::new(b"\n".to_vec());
        let out = run_session(config, options, &mut input, Vec::new())
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_full_session_against_conforming_server() {
        let server = MockServer::start(vec![
            ("GET", "/?name=TestUser", MockResponse::ok("Hello, TestUser!")),
            ("GET", "*", MockResponse::ok("Hello, Guest!")),
            ("POST", "/", MockResponse::ok("created")),
            ("PUT", "/", MockResponse::ok("updated")),
            ("DELETE", "/resource/123", MockResponse::ok("deleted")),
            ("PATCH", "/", MockResponse::new(405, "Method Not Allowed", "")),
        ])
        .await;

        let out = session(&config(server.base_url()), &options()).await;

        assert!(out.starts_with("Testing HTTP server...\n=== TEST 1: GET request ===\n"));
        assert!(out.contains("Response: Hello, TestUser!\nStatus: SUCCESS\n"));
        assert!(out.contains("Status code: 405 Method Not Allowed\nVerdict: CORRECT\n"));
        assert!(out.contains("Total: 6 | Pass: 6 | Fail: 0 | Error: 0"));
        assert!(out.ends_with(&format!("{EXIT_PROMPT}\n")));
        assert_eq!(server.requests().len(), 8);
    }

    #[tokio::test]
    async fn test_refused_session_still_reaches_prompt() {
        let out = session(&config(refused_base_url()), &options()).await;

        assert_eq!(out.matches("=== TEST").count(), 6);
        assert!(!out.contains("Status code"));
        assert!(out.contains("Total: 6 | Pass: 0 | Fail: 0 | Error: 6"));
        assert!(out.ends_with(&format!("{EXIT_PROMPT}\n")));
    }

    #[tokio::test]
    async fn test_fatal_error_is_reported_once() {
        let out = session(&config("not a url/".to_string()), &options()).await;

        assert!(out.contains("Error while testing: Invalid URL: not a url/?name=TestUser"));
        assert!(!out.contains("Summary for"));
        assert!(out.ends_with(&format!("{EXIT_PROMPT}\n")));
    }

    #[tokio::test]
    async fn test_selected_scenarios_without_pause() {
        let server = MockServer::start(vec![(
            "PATCH",
            "/",
            MockResponse::new(405, "Method Not Allowed", ""),
        )])
        .await;

        let options = SessionOptions {
            scenarios: vec![Scenario::UnsupportedMethod],
            pause: false,
            ..options()
        };
        let out = session(&config(server.base_url()), &options).await;

        assert_eq!(out.matches("=== TEST").count(), 1);
        assert!(!out.contains(EXIT_PROMPT));
    }
}
