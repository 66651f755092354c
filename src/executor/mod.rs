//! Scenario execution
//!
//! A single generic runner drives every scenario plan in sequence.

#[cfg(test)]
mod mock_server;
mod runner;
mod session;

pub use runner::ScenarioRunner;
pub use session::{run_session, SessionOptions};
