/*
[INPUT]:  Public API exports for onesignal-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod args;
pub mod commands;
pub mod config;

// Re-export main types for convenience
pub use crate::args::{Cli, Command};
pub use crate::config::CliConfig;
