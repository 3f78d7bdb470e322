//! Interactive prompts for missing arguments

use crate::shared::Result;
use std::io::{self, BufRead, Write};

/// Return `current` when set, otherwise ask for it on the terminal
pub fn ask_for_input(label: &str, current: Option<&str>) -> Result<String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    ask_with(&mut input, &mut io::stderr(), label, current)
}

pub fn ask_with(
    input: &mut dyn BufRead,
    prompt: &mut dyn Write,
    label: &str,
    current: Option<&str>,
) -> Result<String> {
    if let Some(value) = current.filter(|v| !v.is_empty()) {
        return Ok(value.to_string());
    }

    write!(prompt, "{}", label)?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
