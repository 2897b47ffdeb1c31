//! Pagination module
//!
//! Computes page counts, item offsets, navigation links and the cropped
//! window of page links around the current page.
//!
//! # Overview
//!
//! The engine ([`PagerCore`]) reads the current page and page size from a
//! [`ParamSource`] and asks a [`UrlProvider`] for link targets. Navigation
//! URLs are generated immediately; the before/after windows are returned as
//! [`LinkSequence`] values that generate URLs only while being iterated.

mod engine;
mod links;
mod source;
mod types;
mod window;

pub use engine::{Pager, PagerCore};
pub use links::{LinkSequence, Links, PageLink};
pub use source::{FixedParams, ParamSource, UrlPattern, UrlProvider};
pub use types::{NavLink, NavPolicy, PagerView};
pub use window::Window;

#[cfg(test)]
mod tests;
