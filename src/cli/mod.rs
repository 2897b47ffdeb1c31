//! CLI module
//!
//! Command-line interface for computing pager views.
//!
//! # Commands
//!
//! - `view` - Compute the pager for fixed page parameters
//! - `request` - Compute the pager for a request URL
//! - `config` - Show the effective configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
