//! The user's display name, kept in a small side file next to the todos.

use anyhow::{Context, Result};
use colored::*;
use log::debug;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

/// Name used when the user does not give one.
pub const DEFAULT_NAME: &str = "Friend";

/// Read the stored display name. A missing or blank file yields `None`.
pub fn load_name(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let name = content.trim();
            Ok(if name.is_empty() { None } else { Some(name.to_string()) })
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("Failed to read name file {}", path.display())),
    }
}

/// Persist the display name.
pub fn save_name(path: &Path, name: &str) -> Result<()> {
    crate::model::write_private(path, name.as_bytes())
        .with_context(|| format!("Failed to write name file {}", path.display()))?;
    debug!("Saved display name to {}", path.display());
    Ok(())
}

/// Return the stored display name, asking for it on first run when stdin is
/// a terminal.
pub fn resolve_name(path: &Path) -> Result<String> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    resolve_name_with(path, interactive, &mut stdin.lock(), &mut io::stdout())
}

/// Same as [`resolve_name`], reading the answer from `input` and writing the
/// prompt to `output`. Without `interactive` the default name is used and
/// nothing is saved.
pub fn resolve_name_with<R: BufRead, W: Write>(
    path: &Path,
    interactive: bool,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    if let Some(name) = load_name(path)? {
        return Ok(name);
    }
    if !interactive {
        return Ok(DEFAULT_NAME.to_string());
    }

    writeln!(output, "\n{}", "👋 Welcome to Todo App!".bright_cyan().bold())?;
    write!(output, "What's your name? ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer).context("Failed to read name")?;
    let name = match answer.trim() {
        "" => DEFAULT_NAME.to_string(),
        name => name.to_string(),
    };

    save_name(path, &name)?;
    writeln!(
        output,
        "\n{}",
        format!("Nice to meet you, {}! 🎉", name).bright_green()
    )?;
    Ok(name)
}
