//! Capabilities the pager consumes from its host
//!
//! The engine never looks at requests or routes itself. It asks a
//! [`ParamSource`] for the current page and page size, and a [`UrlProvider`]
//! for the link target of any page number.

use crate::error::{Error, Result};
use crate::template::{self, TemplateContext};
use serde_json::json;

/// Resolves the current page and page size.
///
/// Values are reported raw (signed) so that out-of-range input coming from a
/// request can be rejected with the offending value instead of being wrapped.
pub trait ParamSource {
    /// Current page number (1-indexed)
    fn current_page(&self) -> i64;

    /// Maximum number of items on a page
    fn page_size(&self) -> i64;
}

/// Produces a navigable URL for a target page number.
///
/// Must be deterministic for a fixed page number; the engine may call it more
/// than once for the same page.
pub trait UrlProvider {
    /// URL of the given page
    fn url(&self, page: u64) -> String;
}

impl<F> UrlProvider for F
where
    F: Fn(u64) -> String,
{
    fn url(&self, page: u64) -> String {
        self(page)
    }
}

// ============================================================================
// Fixed Parameters
// ============================================================================

/// Parameter source with constant values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedParams {
    /// Current page number
    pub page: i64,
    /// Page size
    pub page_size: i64,
}

impl FixedParams {
    /// Create a new fixed parameter source
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }
}

impl ParamSource for FixedParams {
    fn current_page(&self) -> i64 {
        self.page
    }

    fn page_size(&self) -> i64 {
        self.page_size
    }
}

// ============================================================================
// URL Pattern
// ============================================================================

/// URL provider backed by a `{{ page }}` template, e.g. `/items?page={{ page }}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPattern {
    pattern: String,
}

impl UrlPattern {
    /// Create a URL pattern.
    ///
    /// The pattern must reference `page`; any other variable is rejected since
    /// nothing would ever fill it in.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let vars = template::extract_variables(&pattern);
        if !vars.iter().any(|v| v == "page") {
            return Err(Error::template(format!(
                "URL pattern '{pattern}' does not reference {{{{ page }}}}"
            )));
        }
        if let Some(unknown) = vars.iter().find(|v| *v != "page") {
            return Err(Error::undefined_var(unknown.clone()));
        }
        Ok(Self { pattern })
    }

    /// The raw pattern
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl UrlProvider for UrlPattern {
    fn url(&self, page: u64) -> String {
        let ctx = TemplateContext::with_values(json!({ "page": page }));
        template::render_optional(&self.pattern, &ctx)
    }
}
