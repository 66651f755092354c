//! Shared utilities

mod logger;
mod prompt;
mod timer;

pub use logger::{init_logger, LogLevel};
pub use prompt::wait_for_keypress;
#[cfg(test)]
pub use prompt::EXIT_PROMPT;
pub use timer::Timer;
