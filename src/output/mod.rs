//! Output module
//!
//! Console report writer and run summary table.

mod console;
mod formatter;

pub use console::Console;
pub use formatter::SummaryFormatter;
