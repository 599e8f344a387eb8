//! Scoped subprocess execution with bounded wait
//!
//! All external tools are run through here: output is captured, the wait is
//! bounded by a wall-clock timeout, and the child is reaped on every exit
//! path. `kill_on_drop` guarantees a timed-out child is terminated when its
//! future is dropped by the timeout wrapper.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time;

use crate::domain::errors::ExportError;
use crate::domain::result::Result;

/// Captured result of a completed subprocess.
#[derive(Debug)]
pub struct ProcessOutput {
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,

    /// Captured standard output, lossily decoded as UTF-8.
    pub stdout: String,

    /// Captured standard error, lossily decoded as UTF-8.
    pub stderr: String,
}

impl ProcessOutput {
    /// True iff the process exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// The tool's diagnostic text: stderr if non-empty, stdout otherwise.
    pub fn diagnostic(&self) -> &str {
        if self.stderr.trim().is_empty() {
            self.stdout.trim()
        } else {
            self.stderr.trim()
        }
    }
}

/// Runs `program args...` to completion with a bounded wait.
///
/// `tool` names the invocation in errors and logs. The child's stdout and
/// stderr are captured; stdin is closed.
///
/// # Errors
///
/// - [`ExportError::ToolUnavailable`] when the program cannot be found
/// - [`ExportError::Timeout`] when the bound elapses (the child is killed)
/// - [`ExportError::Unexpected`] for any other spawn or wait failure
pub async fn run_with_timeout(
    tool: &str,
    program: &str,
    args: &[String],
    timeout: Duration,
) -> Result<ProcessOutput> {
    tracing::debug!(
        tool,
        program,
        ?args,
        timeout_secs = timeout.as_secs(),
        "Spawning external tool"
    );

    let output_future = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();

    let output = match time::timeout(timeout, output_future).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ExportError::unavailable(
                tool,
                format!("{program} not found on PATH"),
            ));
        }
        Ok(Err(e)) => {
            return Err(ExportError::Unexpected(format!(
                "failed to run {program}: {e}"
            )));
        }
        Err(_) => {
            // Dropping the output future kills and reaps the child.
            return Err(ExportError::Timeout {
                tool: tool.to_string(),
                timeout_secs: timeout.as_secs(),
            });
        }
    };

    let result = ProcessOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    tracing::debug!(tool, code = ?result.code, "External tool finished");
    Ok(result)
}

/// Runs `program args...` to completion with no timeout bound.
///
/// Used for the HTML-to-PDF render step, which carries no bound.
pub async fn run_unbounded(tool: &str, program: &str, args: &[String]) -> Result<ProcessOutput> {
    tracing::debug!(tool, program, ?args, "Spawning external tool (unbounded)");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExportError::unavailable(tool, format!("{program} not found on PATH"))
            } else {
                ExportError::Unexpected(format!("failed to run {program}: {e}"))
            }
        })?;

    Ok(ProcessOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
