//! Shared prompt helpers for commands

use std::io::{self, Write};

use anyhow::Result;

use crate::menu;

/// Print a prompt and read one trimmed line from stdin.
pub fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Ask a y/n question. Anything but "y" declines.
pub fn confirm(message: &str) -> Result<bool> {
    let answer = prompt(message)?;
    Ok(menu::parse_confirm(&answer))
}

/// Block until the operator presses Enter.
pub fn pause() -> Result<()> {
    prompt("\nPress Enter to return to the main menu...")?;
    Ok(())
}
