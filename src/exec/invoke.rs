//! Invocation building for the wrapped program.
//!
//! Decides what to run (chezmoi directly, or sudo with chezmoi prepended to
//! the arguments) and hands the result to a [`CommandRunner`] bound to this
//! process's real standard streams.

use anyhow::Result;
use log::debug;
use std::process::Stdio;

use crate::exec::runner::CommandRunner;
use crate::utils::privilege;

/// The wrapped executable. Arguments are forwarded to it verbatim.
pub const TARGET_PROGRAM: &str = "chezmoi";

/// Privilege-escalation wrapper used when elevation is requested.
pub const ELEVATION_WRAPPER: &str = "sudo";

/// Pick the effective program and argument vector.
///
/// With elevation the wrapper becomes the program and the target's name is
/// prepended to the arguments; without it the target runs as-is.
fn build_invocation(args: &[String], elevate: bool) -> (&'static str, Vec<String>) {
    if elevate {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(TARGET_PROGRAM.to_string());
        argv.extend_from_slice(args);
        (ELEVATION_WRAPPER, argv)
    } else {
        (TARGET_PROGRAM, args.to_vec())
    }
}

/// Run the target program through `runner` with the parent's standard
/// streams attached, and return the child's exit code.
pub fn execute_with(
    runner: &mut dyn CommandRunner,
    args: &[String],
    elevate: bool,
) -> Result<i32> {
    if elevate && privilege::is_root() {
        debug!("already root, elevating through {} anyway", ELEVATION_WRAPPER);
    }

    let (program, argv) = build_invocation(args, elevate);
    debug!("exec: {} {:?}", program, argv);

    runner.run(
        program,
        &argv,
        Stdio::inherit(),
        Stdio::inherit(),
        Stdio::inherit(),
    )
}
