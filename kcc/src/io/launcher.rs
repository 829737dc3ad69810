//! Launcher abstraction for leaf test scripts.
//!
//! The [`ScriptLauncher`] trait decouples the recursive executor from real
//! process spawning. Tests use scripted launchers that return
//! predetermined outcomes without starting children.

use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::io::process::run_command_with_timeout;

/// Exit code recorded when a script cannot be located, fails to launch,
/// or yields no status (killed by signal or timeout).
pub const EXIT_NOT_FOUND: i32 = -1;

/// Result of launching one leaf test command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub exit_code: i32,
    pub timed_out: bool,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ExecutionOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Outcome carrying only an exit code, with empty streams.
    pub fn from_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            timed_out: false,
            stdout: Vec::new(),
            stderr: Vec::new(),
        }
    }
}

/// Abstraction over leaf test execution backends.
pub trait ScriptLauncher {
    /// Run `command_line` to completion and report its outcome.
    fn launch(&self, command_line: &str) -> Result<ExecutionOutcome>;
}

/// Launcher that runs the command line through `sh -c`.
///
/// The argument string from the suite file is appended verbatim to the
/// script path, so the shell performs its usual word splitting.
pub struct ShellLauncher {
    pub timeout: Duration,
    pub output_limit_bytes: usize,
}

impl ScriptLauncher for ShellLauncher {
    fn launch(&self, command_line: &str) -> Result<ExecutionOutcome> {
        debug!(command_line, "executing test script");
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command_line);

        let output = run_command_with_timeout(cmd, self.timeout, self.output_limit_bytes)
            .with_context(|| format!("run '{command_line}'"))?;

        Ok(ExecutionOutcome {
            exit_code: output.status.code().unwrap_or(EXIT_NOT_FOUND),
            timed_out: output.timed_out,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
