//! Pager view types
//!
//! The values a template consumes after a page view has been computed.

use super::links::LinkSequence;
use serde::Serialize;

/// A first/previous/next/last navigation link.
///
/// `Hidden` is distinct from any URL, including an empty one. Serializes as
/// the URL string or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(untagged)]
pub enum NavLink {
    /// The link is rendered and points at this URL
    Shown(String),
    /// No link is rendered
    #[default]
    Hidden,
}

impl NavLink {
    /// Check if the link is rendered
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }

    /// Check if the link is hidden
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// URL of the link, if shown
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Shown(url) => Some(url),
            Self::Hidden => None,
        }
    }
}

impl From<Option<String>> for NavLink {
    fn from(url: Option<String>) -> Self {
        url.map_or(Self::Hidden, Self::Shown)
    }
}

/// Which navigation links may be shown at all.
///
/// A disabled link is hidden even when its target page exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavPolicy {
    pub show_first: bool,
    pub show_prev: bool,
    pub show_next: bool,
    pub show_last: bool,
}

impl Default for NavPolicy {
    fn default() -> Self {
        Self {
            show_first: true,
            show_prev: true,
            show_next: true,
            show_last: true,
        }
    }
}

/// Computed pager view for one page of a dataset
#[derive(Debug, Clone, Serialize)]
pub struct PagerView<'a> {
    /// Total number of items
    pub total_count: u64,
    /// Items per page
    pub page_size: u64,
    /// Current page (1-indexed)
    pub current_page: u64,
    /// Total number of pages
    pub page_count: u64,
    /// 1-indexed offset of the first item on the current page
    pub first_item_offset: u64,
    /// 1-indexed offset of the last item on the current page
    pub last_item_offset: u64,
    #[serde(rename = "first_page_url")]
    pub first_page: NavLink,
    #[serde(rename = "prev_page_url")]
    pub prev_page: NavLink,
    #[serde(rename = "next_page_url")]
    pub next_page: NavLink,
    #[serde(rename = "last_page_url")]
    pub last_page: NavLink,
    /// Links to the pages right before the current one
    pub before_links: LinkSequence<'a>,
    /// Links to the pages right after the current one
    pub after_links: LinkSequence<'a>,
}

impl PagerView<'_> {
    /// Number of items on the current page
    pub fn current_page_size(&self) -> u64 {
        self.last_item_offset + 1 - self.first_item_offset
    }

    /// Check if the current page is the first page
    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Check if the current page is the last page
    pub fn is_last_page(&self) -> bool {
        self.current_page == self.page_count
    }
}
