//! Exit prompt

use std::io::{self, BufRead, Write};

pub const EXIT_PROMPT: &str = "Press Enter to exit...";

/// Print the exit prompt and block until a line (or EOF) arrives on `input`
pub fn wait_for_keypress<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out, "{EXIT_PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
