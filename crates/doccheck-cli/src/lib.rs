//! # doccheck-cli
//!
//! Argument parsing and command implementations behind the `doccheck`
//! binary. Commands write their user-facing output to a caller-supplied
//! writer; logs go to stderr through `tracing`.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{AnalyzeArgs, Cli, Commands};
