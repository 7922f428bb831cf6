//! Library exports for roombook-cli.
//!
//! This module exports the CLI structure for use by the binary and by
//! tests that drive commands directly.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
