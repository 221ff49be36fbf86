//! External toolchain adapters.
//!
//! Each adapter is a black-box command invocation over the artifact path:
//! input = artifact path, output = exit status + combined stdout/stderr.
//! Invocations carry a per-tool timeout; expiry surfaces as an invocation
//! error that callers absorb as a degraded-result outcome.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

/// A single toolchain command.
///
/// The artifact path is appended as the final argument at invocation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolSpec {
    /// Executable name or path.
    pub program: String,

    /// Arguments preceding the artifact path.
    pub args: Vec<String>,
}

impl ToolSpec {
    /// Create a new tool command.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Captured outcome of one tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code (0 = success, -1 if terminated by signal).
    pub exit_code: i32,

    /// Combined stdout and stderr.
    pub combined: String,

    /// Duration in milliseconds.
    pub duration_ms: u64,

    /// Whether the tool exited successfully.
    pub success: bool,
}

/// Commands for the three evaluation tools, plus the per-invocation timeout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolchainConfig {
    /// Compile check; any build output is discarded.
    pub compiler: ToolSpec,

    /// Static analyzer; its output lines become issue entries.
    pub analyzer: ToolSpec,

    /// Canonical formatter in diff mode; output uses `+`/`-` line prefixes.
    pub formatter: ToolSpec,

    /// Timeout in seconds applied to each invocation (0 = no timeout).
    pub timeout_secs: u64,
}

impl ToolchainConfig {
    /// Toolchain for Go artifacts: `go build` with discarded output,
    /// `go vet`, and `gofmt -d` for the canonical-format diff.
    pub fn go() -> Self {
        Self {
            compiler: ToolSpec::new("go", &["build", "-o", "/dev/null"]),
            analyzer: ToolSpec::new("go", &["vet"]),
            formatter: ToolSpec::new("gofmt", &["-d"]),
            timeout_secs: 120,
        }
    }

    /// Replace the per-invocation timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self::go()
    }
}

/// Run a tool against the artifact and capture its outcome.
///
/// Fails only when the invocation itself cannot complete: spawn error or
/// timeout expiry. A non-zero exit from a tool that ran to completion is a
/// captured outcome, not an error.
pub async fn run_tool(
    spec: &ToolSpec,
    artifact: &Path,
    timeout_secs: u64,
) -> anyhow::Result<ToolOutput> {
    let start = Instant::now();

    // Reap the child if the timeout drops the wait future, so a hung tool
    // does not outlive the evaluation that gave up on it.
    let child = Command::new(&spec.program)
        .args(&spec.args)
        .arg(artifact)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let output = if timeout_secs > 0 {
        tokio::time::timeout(
            std::time::Duration::from_secs(timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| {
            anyhow::anyhow!(
                "tool {} timed out after {} seconds",
                spec.program,
                timeout_secs
            )
        })??
    } else {
        child.wait_with_output().await?
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    let exit_code = output.status.code().unwrap_or(-1);

    let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(ToolOutput {
        exit_code,
        combined,
        duration_ms,
        success: output.status.success(),
    })
}
