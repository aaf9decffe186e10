//! Child-process execution.
//!
//! [`CommandRunner`] is the seam between deciding what to run and actually
//! running it: production code goes through [`SystemRunner`], tests inject a
//! recording double instead.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Capability to execute an external program and report its exit code.
pub trait CommandRunner {
    /// Synchronously run `program` with `args`, wiring the given streams to
    /// the child's standard input/output/error, and block until it exits.
    ///
    /// A child that starts and terminates is a success regardless of its
    /// status; an error means the program could not be started at all.
    fn run(
        &mut self,
        program: &str,
        args: &[String],
        stdin: Stdio,
        stdout: Stdio,
        stderr: Stdio,
    ) -> Result<i32>;
}

/// Runs programs as real child processes via [`std::process::Command`].
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &mut self,
        program: &str,
        args: &[String],
        stdin: Stdio,
        stdout: Stdio,
        stderr: Stdio,
    ) -> Result<i32> {
        let status = Command::new(program)
            .args(args)
            .stdin(stdin)
            .stdout(stdout)
            .stderr(stderr)
            .status()
            .with_context(|| format!("failed to execute {}", program))?;

        // A signal-killed child has no exit code; report the -1 sentinel.
        Ok(status.code().unwrap_or(-1))
    }
}
