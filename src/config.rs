//! Pager configuration
//!
//! Host-level options loaded from YAML: display options for the pager and
//! where the page / page size parameters live in a request.

use crate::error::{Error, Result};
use crate::pagination::NavPolicy;
use crate::render;
use crate::types::ParamLocation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of page links, current page included
pub const DEFAULT_LINK_COUNT: u32 = 11;

/// Default template name
pub const DEFAULT_TEMPLATE: &str = "pager";

// ============================================================================
// Pager Config
// ============================================================================

/// Complete pager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Render nothing when there is only one page
    #[serde(default = "default_true")]
    pub auto_hide: bool,

    /// Built-in template used for rendering
    #[serde(default = "default_template")]
    pub template: String,

    /// Number of page links shown, current page included
    #[serde(default = "default_link_count")]
    pub link_count: u32,

    #[serde(default = "default_true")]
    pub show_first_link: bool,

    #[serde(default = "default_true")]
    pub show_prev_link: bool,

    #[serde(default = "default_true")]
    pub show_next_link: bool,

    #[serde(default = "default_true")]
    pub show_last_link: bool,

    /// Request parameter bindings
    #[serde(default)]
    pub request: RequestBindingConfig,
}

fn default_true() -> bool {
    true
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_link_count() -> u32 {
    DEFAULT_LINK_COUNT
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            auto_hide: true,
            template: default_template(),
            link_count: DEFAULT_LINK_COUNT,
            show_first_link: true,
            show_prev_link: true,
            show_next_link: true,
            show_last_link: true,
            request: RequestBindingConfig::default(),
        }
    }
}

impl PagerConfig {
    /// Navigation links enabled by the `show_*_link` options
    pub fn nav_policy(&self) -> NavPolicy {
        NavPolicy {
            show_first: self.show_first_link,
            show_prev: self.show_prev_link,
            show_next: self.show_next_link,
            show_last: self.show_last_link,
        }
    }

    /// Validate option values
    pub fn validate(&self) -> Result<()> {
        if self.link_count < 1 {
            return Err(Error::config("link_count must be at least 1"));
        }

        if !render::is_builtin(&self.template) {
            return Err(Error::config(format!(
                "Unknown template '{}'. Built-in templates: {}",
                self.template,
                render::BUILTIN_TEMPLATES.join(", ")
            )));
        }

        for (field, key) in [
            ("request.page_key", &self.request.page_key),
            ("request.pagesize_key", &self.request.pagesize_key),
        ] {
            if key.as_deref().is_some_and(str::is_empty) {
                return Err(Error::config(format!("{field} cannot be empty")));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Request Bindings
// ============================================================================

/// Where the page and page size are read from in a request.
///
/// Any field may be left out; the request binding then needs it supplied
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBindingConfig {
    #[serde(default)]
    pub page_src: Option<ParamLocation>,

    #[serde(default)]
    pub page_key: Option<String>,

    #[serde(default)]
    pub pagesize_src: Option<ParamLocation>,

    #[serde(default)]
    pub pagesize_key: Option<String>,
}

impl Default for RequestBindingConfig {
    fn default() -> Self {
        Self {
            page_src: Some(ParamLocation::Query),
            page_key: Some("page".to_string()),
            pagesize_src: Some(ParamLocation::Query),
            pagesize_key: Some("pagesize".to_string()),
        }
    }
}

impl RequestBindingConfig {
    /// Bindings with nothing configured
    pub fn empty() -> Self {
        Self {
            page_src: None,
            page_key: None,
            pagesize_src: None,
            pagesize_key: None,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a pager configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_config_from_str(&content)
}

/// Load a pager configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PagerConfig> {
    // An empty document means "all defaults"
    if yaml.trim().is_empty() {
        return Ok(PagerConfig::default());
    }

    let config: PagerConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse pager config YAML: {e}")))?;

    config.validate()?;
    Ok(config)
}
