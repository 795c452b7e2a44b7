//! Bounded execution of external paste helpers

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::trace;

use crate::application::ports::PasteError;

/// Run `program` with `args`, returning trimmed stdout.
///
/// The child is killed if it outlives `timeout`.
pub(super) async fn run_tool(
    program: &'static str,
    args: &[&str],
    timeout: Duration,
) -> Result<String, PasteError> {
    trace!(program, ?args, "running paste helper");

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(timeout, child)
        .await
        .map_err(|_| PasteError::Timeout(program.to_string()))?
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PasteError::ToolNotFound(program)
            } else {
                PasteError::Failed(format!("{}: {}", program, e))
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PasteError::Failed(format!(
            "{} exited with status: {} {}",
            program,
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Check if a tool binary is available using `which`
#[cfg(target_os = "linux")]
pub(super) async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}
