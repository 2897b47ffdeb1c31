//! Common types used throughout pagelinks
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Ordered key-value map with string keys and values.
///
/// Ordered so that generated query strings are stable.
pub type StringMap = BTreeMap<String, String>;

// ============================================================================
// Parameter Location
// ============================================================================

/// Where a pagination parameter is read from in a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ParamLocation {
    /// Query string (`?page=3`)
    #[default]
    Query,
    /// Route parameters (`/items/{{ page }}`)
    Params,
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamLocation::Query => f.write_str("query"),
            ParamLocation::Params => f.write_str("params"),
        }
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the command-line runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
