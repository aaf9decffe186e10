//! Subprocess plumbing: invocation building and child execution.

pub mod invoke;
pub mod runner;

pub use invoke::execute_with;
pub use runner::{CommandRunner, SystemRunner};
