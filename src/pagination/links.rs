//! Lazy page-link sequences
//!
//! A [`LinkSequence`] covers an inclusive range of page numbers and only asks
//! its [`UrlProvider`] for a URL when the corresponding element is consumed.

use super::source::UrlProvider;
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// A single rendered page link
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PageLink {
    /// Target page number
    pub page: u64,
    /// URL of the target page
    pub url: String,
}

/// Restartable, lazily evaluated sequence of page links over `[from, to]`.
///
/// The range is empty when `from > to`. Every call to [`LinkSequence::iter`]
/// starts again at `from`.
#[derive(Clone, Copy)]
pub struct LinkSequence<'a> {
    from: u64,
    to: u64,
    urls: &'a dyn UrlProvider,
}

impl<'a> LinkSequence<'a> {
    /// Create a sequence over the inclusive range `[from, to]`
    pub fn new(from: u64, to: u64, urls: &'a dyn UrlProvider) -> Self {
        Self { from, to, urls }
    }

    /// First page number of the range
    pub fn start(&self) -> u64 {
        self.from
    }

    /// Last page number of the range
    pub fn end(&self) -> u64 {
        self.to
    }

    /// Page numbers covered, without generating any URL
    pub fn pages(&self) -> RangeInclusive<u64> {
        self.from..=self.to
    }

    /// Number of links in the sequence
    pub fn len(&self) -> usize {
        if self.from > self.to {
            0
        } else {
            span_len(self.from, self.to)
        }
    }

    /// Check if the sequence yields nothing
    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }

    /// Iterate from the start of the range
    pub fn iter(&self) -> Links<'a> {
        Links {
            next: self.from,
            to: self.to,
            done: self.from > self.to,
            urls: self.urls,
        }
    }
}

impl fmt::Debug for LinkSequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkSequence")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &LinkSequence<'a> {
    type Item = PageLink;
    type IntoIter = Links<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for LinkSequence<'a> {
    type Item = PageLink;
    type IntoIter = Links<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for LinkSequence<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Iterator over a [`LinkSequence`]
pub struct Links<'a> {
    next: u64,
    to: u64,
    done: bool,
    urls: &'a dyn UrlProvider,
}

impl Iterator for Links<'_> {
    type Item = PageLink;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let page = self.next;
        // `to` may be u64::MAX, so stop before stepping past it
        if page == self.to {
            self.done = true;
        } else {
            self.next += 1;
        }
        Some(PageLink {
            page,
            url: self.urls.url(page),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.done {
            0
        } else {
            span_len(self.next, self.to)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Links<'_> {}

/// Number of pages in `from..=to`, saturating at `usize::MAX`
fn span_len(from: u64, to: u64) -> usize {
    (to - from)
        .checked_add(1)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(usize::MAX)
}

impl FusedIterator for Links<'_> {}
