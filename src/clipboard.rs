// Clipboard device: hand text to the platform clipboard utility.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{anyhow, Context, Result};
use tracing::debug;

/// Clipboard tools to try, in order. The first one that spawns and exits
/// successfully wins.
#[cfg(target_os = "macos")]
const CANDIDATES: &[&[&str]] = &[&["pbcopy"]];

#[cfg(not(target_os = "macos"))]
const CANDIDATES: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Copy `text` to the system clipboard.
///
/// Failure is reported as a value for the caller to log or display; it is
/// never fatal to the session.
pub fn copy(text: &str) -> Result<()> {
    let mut last_err = None;

    for candidate in CANDIDATES {
        match pipe_to(candidate, text) {
            Ok(()) => {
                debug!("Copied {} bytes via {}", text.len(), candidate[0]);
                return Ok(());
            }
            Err(e) => last_err = Some(e),
        }
    }

    Err(last_err.unwrap_or_else(|| anyhow!("no clipboard utility available")))
}

fn pipe_to(command: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(command[0])
        .args(&command[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to spawn {}", command[0]))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("failed to write to {}", command[0]))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("{} did not exit cleanly", command[0]))?;

    if !status.success() {
        return Err(anyhow!("{} exited with {status}", command[0]));
    }

    Ok(())
}
