//! Pagination engine
//!
//! Turns a total item count plus the current page/page size reported by a
//! [`ParamSource`] into a [`PagerView`]: page count, item offsets,
//! first/prev/next/last links and the cropped link window.

use super::links::LinkSequence;
use super::source::{ParamSource, UrlProvider};
use super::types::{NavLink, NavPolicy, PagerView};
use super::window::Window;
use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::render;
use tracing::{debug, warn};

/// Validated page position, before any URL is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    total_count: u64,
    page_size: u64,
    current_page: u64,
    page_count: u64,
}

impl Position {
    fn first_item_offset(&self) -> u64 {
        (self.current_page - 1) * self.page_size + 1
    }

    fn last_item_offset(&self) -> u64 {
        self.current_page
            .saturating_mul(self.page_size)
            .min(self.total_count)
    }
}

/// Pager settings, independent of any request.
///
/// Holds the total count and display options. The current page and page size
/// are read from a [`ParamSource`] on every [`PagerCore::view`] call, so one
/// core can serve many requests.
#[derive(Debug, Clone)]
pub struct PagerCore {
    total_count: Option<u64>,
    link_count: u32,
    auto_hide: bool,
    template: String,
    nav: NavPolicy,
}

impl Default for PagerCore {
    fn default() -> Self {
        Self::from_config(&PagerConfig::default())
    }
}

impl PagerCore {
    /// Create a core with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a core from configuration
    pub fn from_config(config: &PagerConfig) -> Self {
        Self {
            total_count: None,
            link_count: config.link_count,
            auto_hide: config.auto_hide,
            template: config.template.clone(),
            nav: config.nav_policy(),
        }
    }

    /// Set the total number of items
    pub fn set_total_count(&mut self, total_count: u64) -> &mut Self {
        self.total_count = Some(total_count);
        self
    }

    /// Set the number of page links shown, current page included
    pub fn set_link_count(&mut self, link_count: u32) -> &mut Self {
        self.link_count = link_count;
        self
    }

    /// Enable or disable hiding the pager when there is only one page
    pub fn set_auto_hide(&mut self, auto_hide: bool) -> &mut Self {
        self.auto_hide = auto_hide;
        self
    }

    /// Set the template used by [`PagerCore::render`]
    pub fn set_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.template = template.into();
        self
    }

    /// Set which navigation links may be shown
    pub fn set_nav_policy(&mut self, nav: NavPolicy) -> &mut Self {
        self.nav = nav;
        self
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn link_count(&self) -> u32 {
        self.link_count
    }

    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn nav_policy(&self) -> NavPolicy {
        self.nav
    }

    /// Resolve and validate the current position
    fn position(&self, params: &dyn ParamSource) -> Result<Position> {
        let total_count = self.total_count.ok_or_else(|| {
            Error::config("total count must be set before computing the pager view")
        })?;

        let page_size = params.page_size();
        if page_size < 1 {
            warn!(page_size, "rejecting page size");
            return Err(Error::invalid_parameter("page_size", page_size));
        }
        let page_size = page_size as u64;

        let page_count = total_count.div_ceil(page_size);

        let current_page = params.current_page();
        if current_page < 1 {
            warn!(current_page, "rejecting page number");
            return Err(Error::invalid_parameter("page", current_page));
        }
        let current_page = current_page as u64;
        if current_page > page_count {
            warn!(current_page, page_count, "page number beyond page count");
            return Err(Error::page_out_of_range(current_page, page_count));
        }

        Ok(Position {
            total_count,
            page_size,
            current_page,
            page_count,
        })
    }

    /// Number of items on the current page.
    ///
    /// Equals the page size everywhere but on a partially filled last page.
    pub fn current_page_size(&self, params: &dyn ParamSource) -> Result<u64> {
        let pos = self.position(params)?;
        Ok(pos.last_item_offset() + 1 - pos.first_item_offset())
    }

    /// Compute the view for the current page.
    ///
    /// Returns `Ok(None)` when auto-hide is enabled and there is a single page.
    pub fn view<'a>(
        &self,
        params: &dyn ParamSource,
        urls: &'a dyn UrlProvider,
    ) -> Result<Option<PagerView<'a>>> {
        if self.link_count < 1 {
            return Err(Error::invalid_parameter(
                "link_count",
                i64::from(self.link_count),
            ));
        }

        let pos = self.position(params)?;

        if self.auto_hide && pos.page_count == 1 {
            debug!(total_count = pos.total_count, "single page, pager hidden");
            return Ok(None);
        }

        let Position {
            current_page,
            page_count,
            ..
        } = pos;

        let has_prev = current_page > 1;
        let has_next = current_page < page_count;
        let nav_link = |enabled: bool, page: u64| -> NavLink {
            if enabled {
                NavLink::Shown(urls.url(page))
            } else {
                NavLink::Hidden
            }
        };

        let window = Window::compute(current_page, page_count, self.link_count);
        debug!(
            current_page,
            page_count,
            link_count = self.link_count,
            before = ?window.before(),
            after = ?window.after(),
            "computed pager window"
        );

        Ok(Some(PagerView {
            total_count: pos.total_count,
            page_size: pos.page_size,
            current_page,
            page_count,
            first_item_offset: pos.first_item_offset(),
            last_item_offset: pos.last_item_offset(),
            first_page: nav_link(has_prev && self.nav.show_first, 1),
            prev_page: nav_link(has_prev && self.nav.show_prev, current_page - 1),
            next_page: nav_link(has_next && self.nav.show_next, current_page + 1),
            last_page: nav_link(has_next && self.nav.show_last, page_count),
            before_links: LinkSequence::new(window.before_from, window.before_to, urls),
            after_links: LinkSequence::new(window.after_from, window.after_to, urls),
        }))
    }

    /// Compute the view and render it with the configured template.
    ///
    /// A hidden pager renders as the empty string.
    pub fn render(&self, params: &dyn ParamSource, urls: &dyn UrlProvider) -> Result<String> {
        let view = self.view(params, urls)?;
        render::render(view.as_ref(), &self.template)
    }
}

/// A [`PagerCore`] bundled with the capabilities it reads from
pub struct Pager<P, U> {
    core: PagerCore,
    params: P,
    urls: U,
}

impl<P, U> Pager<P, U>
where
    P: ParamSource,
    U: UrlProvider,
{
    /// Create a pager with default settings
    pub fn new(params: P, urls: U) -> Self {
        Self::with_core(PagerCore::new(), params, urls)
    }

    /// Create a pager around existing settings
    pub fn with_core(core: PagerCore, params: P, urls: U) -> Self {
        Self { core, params, urls }
    }

    /// Pager settings
    pub fn core(&self) -> &PagerCore {
        &self.core
    }

    /// Mutable pager settings
    pub fn core_mut(&mut self) -> &mut PagerCore {
        &mut self.core
    }

    /// Set the total number of items
    pub fn total_count(&mut self, total_count: u64) -> &mut Self {
        self.core.set_total_count(total_count);
        self
    }

    /// Set the number of page links shown, current page included
    pub fn link_count(&mut self, link_count: u32) -> &mut Self {
        self.core.set_link_count(link_count);
        self
    }

    /// Enable or disable auto-hide
    pub fn auto_hide(&mut self, auto_hide: bool) -> &mut Self {
        self.core.set_auto_hide(auto_hide);
        self
    }

    /// See [`PagerCore::view`]
    pub fn view(&self) -> Result<Option<PagerView<'_>>> {
        self.core.view(&self.params, &self.urls)
    }

    /// See [`PagerCore::current_page_size`]
    pub fn current_page_size(&self) -> Result<u64> {
        self.core.current_page_size(&self.params)
    }

    /// See [`PagerCore::render`]
    pub fn render(&self) -> Result<String> {
        self.core.render(&self.params, &self.urls)
    }
}
