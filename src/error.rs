//! Error types for pagelinks
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pagelinks
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Invalid value for '{name}': {value}")]
    InvalidParameter { name: String, value: i64 },

    #[error("Current page {current_page} is out of range (page count: {page_count})")]
    InvalidState { current_page: u64, page_count: u64 },

    #[error("Parameter '{name}' is not an integer: '{raw}'")]
    UnparsableParameter { name: String, raw: String },

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Template Errors
    // ============================================================================
    #[error("Template error: {message}")]
    Template { message: String },

    #[error("Undefined variable in template: {variable}")]
    UndefinedVariable { variable: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, value: i64) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value,
        }
    }

    /// Create an invalid state error for a page beyond the page count
    pub fn page_out_of_range(current_page: u64, page_count: u64) -> Self {
        Self::InvalidState {
            current_page,
            page_count,
        }
    }

    /// Create an unparsable parameter error
    pub fn unparsable(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::UnparsableParameter {
            name: name.into(),
            raw: raw.into(),
        }
    }

    /// Create a template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Create an undefined variable error
    pub fn undefined_var(variable: impl Into<String>) -> Self {
        Self::UndefinedVariable {
            variable: variable.into(),
        }
    }

    /// Check if this error was caused by the values a parameter source reported,
    /// as opposed to how the pager itself was set up
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidParameter { .. }
                | Error::InvalidState { .. }
                | Error::UnparsableParameter { .. }
        )
    }
}

/// Result type alias for pagelinks
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_parameter("page", 0);
        assert_eq!(err.to_string(), "Invalid value for 'page': 0");

        let err = Error::page_out_of_range(10, 2);
        assert_eq!(
            err.to_string(),
            "Current page 10 is out of range (page count: 2)"
        );
    }

    #[test]
    fn test_is_parameter_error() {
        assert!(Error::invalid_parameter("page", -1).is_parameter_error());
        assert!(Error::page_out_of_range(3, 2).is_parameter_error());
        assert!(Error::unparsable("page", "abc").is_parameter_error());

        assert!(!Error::config("total count not set").is_parameter_error());
        assert!(!Error::template("unknown").is_parameter_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
