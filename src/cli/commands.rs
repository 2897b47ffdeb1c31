//! CLI commands and argument parsing

use crate::types::{LogLevel, ParamLocation};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pagination window calculator
#[derive(Parser, Debug)]
#[command(name = "pagelinks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pager configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (takes precedence over --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level requested on the command line
    pub fn log_level(&self) -> LogLevel {
        match (self.log_level, self.verbose) {
            (Some(level), _) => level,
            (None, true) => LogLevel::Debug,
            (None, false) => LogLevel::Info,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the pager for fixed page parameters
    View {
        /// Total number of items
        #[arg(long)]
        total: u64,

        /// Current page (1-indexed)
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        page: i64,

        /// Items per page
        #[arg(long, default_value = "10", allow_hyphen_values = true)]
        page_size: i64,

        /// Number of page links, current page included
        #[arg(long)]
        link_count: Option<u32>,

        /// Link pattern, must contain {{ page }}
        #[arg(long, default_value = "?page={{ page }}")]
        url: String,

        /// Hide the pager when there is only one page
        #[arg(long)]
        auto_hide: Option<bool>,

        /// Template for html output (pager, links, summary)
        #[arg(long)]
        template: Option<String>,
    },

    /// Compute the pager for a request URL
    Request {
        /// Absolute request URL, e.g. https://example.com/items?page=3
        #[arg(long)]
        url: String,

        /// Total number of items
        #[arg(long)]
        total: u64,

        /// Use this page size instead of reading it from the request
        #[arg(long)]
        fixed_page_size: Option<i64>,

        /// Page parameter location
        #[arg(long)]
        page_src: Option<ParamLocation>,

        /// Page parameter name
        #[arg(long)]
        page_key: Option<String>,

        /// Page size parameter location
        #[arg(long)]
        pagesize_src: Option<ParamLocation>,

        /// Page size parameter name
        #[arg(long)]
        pagesize_key: Option<String>,

        /// Number of page links, current page included
        #[arg(long)]
        link_count: Option<u32>,

        /// Generate links without scheme and host
        #[arg(long)]
        relative: bool,
    },

    /// Show the effective configuration
    Config,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pager view as JSON
    Json,
    /// Rendered HTML
    Html,
    /// Human-readable output
    Pretty,
}
