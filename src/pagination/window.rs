//! Page-link window cropping
//!
//! Computes which page numbers are linked directly before and after the
//! current page. The window is centered on the current page and cropped at
//! both ends of `[1, page_count]`; slots cropped on one side move to the
//! other side as far as the range allows.

use std::ops::RangeInclusive;

/// Before/after page ranges around the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First page linked before the current page
    pub before_from: u64,
    /// Last page linked before the current page (`current - 1`)
    pub before_to: u64,
    /// First page linked after the current page (`current + 1`)
    pub after_from: u64,
    /// Last page linked after the current page
    pub after_to: u64,
}

impl Window {
    /// Compute the window for a valid `current` page.
    ///
    /// Expects `1 <= current <= page_count` and `link_count >= 1`; the engine
    /// checks both before calling. Underflow below page 1 is resolved first by
    /// widening the after side, then overflow past `page_count` by widening the
    /// before side, which may take back what the first step added.
    pub fn compute(current: u64, page_count: u64, link_count: u32) -> Self {
        debug_assert!(current >= 1 && current <= page_count);
        debug_assert!(link_count >= 1);

        let spare = i128::from(link_count.saturating_sub(1));
        let before_span = spare / 2;
        let after_span = spare - before_span;

        let current = i128::from(current);
        let page_count = i128::from(page_count);

        let mut from = current - before_span;
        let mut to = current + after_span;

        if from < 1 {
            to += 1 - from;
            from = 1;
        }

        if to > page_count {
            from = (from - (to - page_count)).max(1);
            to = page_count;
        }

        Self {
            before_from: from as u64,
            before_to: (current - 1) as u64,
            after_from: (current + 1) as u64,
            after_to: to as u64,
        }
    }

    /// Pages linked before the current page
    pub fn before(&self) -> RangeInclusive<u64> {
        self.before_from..=self.before_to
    }

    /// Pages linked after the current page
    pub fn after(&self) -> RangeInclusive<u64> {
        self.after_from..=self.after_to
    }

    /// Number of page links including the current page
    pub fn link_total(&self) -> u64 {
        // after_to >= before_from - 1 always holds, the current page sits between
        self.after_to - self.before_from + 1
    }
}
