//! User interaction (prompts and confirmations).
//!
//! These work on any `BufRead`/`Write` pair so the shell can prompt on the
//! same stream it reads commands from.

use anyhow::Result;

use std::io::{BufRead, Write};

/// Ask a yes/no question. Returns true for `y`/`yes`, false otherwise,
/// including end of input.
pub fn confirm_with_io<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<bool> {
    writeln!(output, "{} (y/n)", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let response = line.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// Prompt for one line of text. Returns `None` at end of input.
pub fn prompt_with_io<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<Option<String>> {
    write!(output, "{}: ", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
