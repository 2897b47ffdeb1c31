//! # pagelinks
//!
//! Pagination metadata and page-link windows for datasets of known size.
//!
//! ## Features
//!
//! - **Page math**: page count, item offsets, items on the current page
//! - **Navigation links**: first/previous/next/last as explicit `Shown`/`Hidden` values
//! - **Cropped link window**: a fixed number of page links around the current page,
//!   rebalanced when it runs into either end of the page range
//! - **Lazy links**: window URLs are generated only while a template iterates them
//! - **Request binding**: read page and page size from query or route parameters
//!   and build links by rewriting them
//!
//! ## Quick Start
//!
//! ```rust
//! use pagelinks::pagination::{FixedParams, Pager};
//!
//! let mut pager = Pager::new(FixedParams::new(4, 15), |page: u64| format!("/items?page={page}"));
//! pager.total_count(200).link_count(5);
//!
//! let view = pager.view().unwrap().expect("more than one page");
//! assert_eq!(view.page_count, 14);
//! assert_eq!(view.before_links.pages(), 2..=3);
//! assert_eq!(view.after_links.pages(), 5..=6);
//! assert_eq!(view.next_page.url(), Some("/items?page=5"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │          RequestPager (query / route parameters)           │
//! └──────────────────────────────┬─────────────────────────────┘
//!                                │ ParamSource + UrlProvider
//! ┌──────────────────────────────┴─────────────────────────────┐
//! │  PagerCore::view() → PagerView      render() → HTML        │
//! ├──────────────┬───────────────┬──────────────┬──────────────┤
//! │ Page math    │ Nav links     │ Window       │ LinkSequence │
//! │ count/offset │ first/prev/   │ cropping     │ lazy URLs    │
//! │              │ next/last     │              │              │
//! └──────────────┴───────────────┴──────────────┴──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Pagination engine, link window and lazy link sequences
pub mod pagination;

/// Pager configuration
pub mod config;

/// Binding a pager to request parameters
pub mod request;

/// Built-in pager templates
pub mod render;

/// Template interpolation
pub mod template;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use config::{load_config, load_config_from_str, PagerConfig};
pub use pagination::{
    FixedParams, LinkSequence, NavLink, PageLink, Pager, PagerCore, PagerView, ParamSource,
    UrlProvider,
};
pub use request::{Request, RequestPager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
