// src/tools.rs
//! Scoped invocation of the external counting tools.

use crate::error::{PortstatError, Result};
use std::process::Command;

/// Captured output of one finished child process.
#[derive(Debug, Clone)]
pub struct Captured {
    pub stdout: String,
    pub stderr: String,
}

impl Captured {
    /// Stdout followed by stderr, as one searchable text.
    #[must_use]
    pub fn combined(&self) -> String {
        let mut text = self.stdout.clone();
        text.push_str(&self.stderr);
        text
    }
}

/// Runs `program` with `args` in the current directory, blocking until it
/// exits, and captures both output streams as text.
///
/// The child's exit status is deliberately not checked: `ag` signals "no
/// matches" with a non-zero exit, and an empty capture is a valid result.
///
/// # Errors
/// Returns an error if the program cannot be found or launched.
pub fn capture(program: &str, args: &[&str]) -> Result<Captured> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| PortstatError::ToolLaunch {
            tool: program.to_string(),
            source,
        })?;

    Ok(Captured {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
