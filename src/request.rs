//! Request binding
//!
//! Binds a pager to an incoming request: the page and page size are read
//! from the query string or route parameters, and page links are built by
//! rewriting those same parameters.
//!
//! ```
//! use pagelinks::config::PagerConfig;
//! use pagelinks::request::{Request, RequestPager};
//!
//! let request = Request::parse("https://shop.example.com/items?page=3&pagesize=10").unwrap();
//! let mut pager = RequestPager::builder(request, &PagerConfig::default()).build().unwrap();
//! pager.set_total_count(95);
//!
//! assert_eq!(pager.page(), 3);
//! let view = pager.view().unwrap().unwrap();
//! assert_eq!(view.page_count, 10);
//! assert_eq!(
//!     view.next_page.url(),
//!     Some("https://shop.example.com/items?page=4&pagesize=10")
//! );
//! ```

use crate::config::{PagerConfig, RequestBindingConfig};
use crate::error::{Error, Result};
use crate::pagination::{PagerCore, PagerView, ParamSource, UrlProvider};
use crate::template::{self, TemplateContext};
use crate::types::{ParamLocation, StringMap};
use tracing::debug;
use url::form_urlencoded;

// ============================================================================
// Request Model
// ============================================================================

/// Route pattern with `{{ name }}` placeholders, e.g. `/items/{{ page }}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: String,
}

impl Route {
    /// Create a route from a pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// The raw pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Names of the route parameters
    pub fn param_names(&self) -> Vec<String> {
        template::extract_variables(&self.pattern)
    }

    /// Build the path for the given route parameters
    pub fn uri(&self, params: &StringMap) -> Result<String> {
        template::render(&self.pattern, &params_context(params))
    }

    /// Like [`Route::uri`], but leaves unknown placeholders in place
    fn uri_lossy(&self, params: &StringMap) -> String {
        template::render_optional(&self.pattern, &params_context(params))
    }
}

fn params_context(params: &StringMap) -> TemplateContext {
    let mut ctx = TemplateContext::new();
    for (key, value) in params {
        ctx.set(key.clone(), value.clone());
    }
    ctx
}

/// The parts of a request the pager cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Scheme, host and port, e.g. `https://example.com`
    pub base_url: String,
    /// Path used when no route is set
    pub path: String,
    /// Route the request was matched against
    pub route: Option<Route>,
    /// Route parameters
    pub params: StringMap,
    /// Query string parameters
    pub query: StringMap,
}

impl Request {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a request from an absolute URL.
    ///
    /// Route parameters are left empty since routing happens elsewhere.
    pub fn parse(input: &str) -> Result<Self> {
        let url = url::Url::parse(input)?;
        Ok(Self {
            base_url: url[..url::Position::BeforePath].to_string(),
            path: url.path().to_string(),
            route: None,
            params: StringMap::new(),
            query: url.query_pairs().into_owned().collect(),
        })
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the matched route
    pub fn with_route(mut self, route: Route) -> Self {
        self.route = Some(route);
        self
    }

    /// Add a route parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Look up a parameter
    pub fn get(&self, location: ParamLocation, key: &str) -> Option<&str> {
        let map = match location {
            ParamLocation::Query => &self.query,
            ParamLocation::Params => &self.params,
        };
        map.get(key).map(String::as_str)
    }
}

// ============================================================================
// Parameter Bindings
// ============================================================================

/// Location and key of a request parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamBinding {
    pub location: ParamLocation,
    pub key: String,
}

impl ParamBinding {
    pub fn new(location: ParamLocation, key: impl Into<String>) -> Self {
        Self {
            location,
            key: key.into(),
        }
    }

    /// Read the bound value from a request; absent values default to 1
    fn read(&self, request: &Request) -> Result<i64> {
        match request.get(self.location, &self.key) {
            None => Ok(1),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::unparsable(&self.key, raw)),
        }
    }

    fn write(&self, query: &mut StringMap, params: &mut StringMap, value: String) {
        let map = match self.location {
            ParamLocation::Query => query,
            ParamLocation::Params => params,
        };
        map.insert(self.key.clone(), value);
    }
}

/// Resolve a binding from explicit values, falling back to the config
fn resolve_binding(
    name: &str,
    location: Option<ParamLocation>,
    key: Option<String>,
    config_location: Option<ParamLocation>,
    config_key: Option<&String>,
) -> Result<ParamBinding> {
    let location = location
        .or(config_location)
        .ok_or_else(|| Error::config(format!("failed to determine {name} parameter source")))?;
    let key = key
        .or_else(|| config_key.cloned())
        .ok_or_else(|| Error::config(format!("failed to determine {name} parameter key")))?;
    Ok(ParamBinding::new(location, key))
}

// ============================================================================
// Request Pager
// ============================================================================

/// Builder for [`RequestPager`]
#[derive(Debug)]
pub struct RequestPagerBuilder<'c> {
    request: Request,
    config: &'c PagerConfig,
    page_src: Option<ParamLocation>,
    page_key: Option<String>,
    pagesize_src: Option<ParamLocation>,
    pagesize_key: Option<String>,
    fixed_page_size: Option<i64>,
}

impl RequestPagerBuilder<'_> {
    /// Read the page number from this location instead of the configured one
    pub fn page_source(mut self, location: ParamLocation) -> Self {
        self.page_src = Some(location);
        self
    }

    /// Read the page number from this key instead of the configured one
    pub fn page_key(mut self, key: impl Into<String>) -> Self {
        self.page_key = Some(key.into());
        self
    }

    /// Read the page size from this location instead of the configured one
    pub fn page_size_source(mut self, location: ParamLocation) -> Self {
        self.pagesize_src = Some(location);
        self
    }

    /// Read the page size from this key instead of the configured one
    pub fn page_size_key(mut self, key: impl Into<String>) -> Self {
        self.pagesize_key = Some(key.into());
        self
    }

    /// Use a fixed page size instead of reading it from the request
    pub fn fixed_page_size(mut self, page_size: i64) -> Self {
        self.fixed_page_size = Some(page_size);
        self
    }

    /// Resolve the bindings and read the current values from the request
    pub fn build(self) -> Result<RequestPager> {
        let bindings: &RequestBindingConfig = &self.config.request;

        let page_binding = resolve_binding(
            "page",
            self.page_src,
            self.page_key,
            bindings.page_src,
            bindings.page_key.as_ref(),
        )?;
        let page = page_binding.read(&self.request)?;

        let (page_size_binding, page_size) = match self.fixed_page_size {
            Some(size) => (None, size),
            None => {
                let binding = resolve_binding(
                    "pagesize",
                    self.pagesize_src,
                    self.pagesize_key,
                    bindings.pagesize_src,
                    bindings.pagesize_key.as_ref(),
                )?;
                let size = binding.read(&self.request)?;
                (Some(binding), size)
            }
        };

        if let Some(route) = &self.request.route {
            let mut params = self.request.params.clone();
            let mut query = StringMap::new();
            page_binding.write(&mut query, &mut params, page.to_string());
            if let Some(binding) = &page_size_binding {
                binding.write(&mut query, &mut params, page_size.to_string());
            }
            route.uri(&params)?;
        }

        debug!(
            page,
            page_size,
            page_key = %page_binding.key,
            "bound pager to request"
        );

        Ok(RequestPager {
            request: self.request,
            core: PagerCore::from_config(self.config),
            page_binding,
            page_size_binding,
            page,
            page_size,
            relative_url: false,
        })
    }
}

/// Pager bound to a request.
///
/// Acts as its own [`ParamSource`] and [`UrlProvider`].
#[derive(Debug, Clone)]
pub struct RequestPager {
    request: Request,
    core: PagerCore,
    page_binding: ParamBinding,
    page_size_binding: Option<ParamBinding>,
    page: i64,
    page_size: i64,
    relative_url: bool,
}

impl RequestPager {
    /// Start binding a pager to a request
    pub fn builder(request: Request, config: &PagerConfig) -> RequestPagerBuilder<'_> {
        RequestPagerBuilder {
            request,
            config,
            page_src: None,
            page_key: None,
            pagesize_src: None,
            pagesize_key: None,
            fixed_page_size: None,
        }
    }

    /// Bind to a request, reading both values as configured
    pub fn for_request(request: Request, config: &PagerConfig) -> Result<Self> {
        Self::builder(request, config).build()
    }

    /// Bind to a request with a fixed page size
    pub fn for_fixed_page_size(
        request: Request,
        config: &PagerConfig,
        page_size: i64,
    ) -> Result<Self> {
        Self::builder(request, config)
            .fixed_page_size(page_size)
            .build()
    }

    /// Override the current page
    pub fn set_page(&mut self, page: i64) -> &mut Self {
        self.page = page;
        self
    }

    /// Override the page size
    pub fn set_page_size(&mut self, page_size: i64) -> &mut Self {
        self.page_size = page_size;
        self
    }

    /// Set the total number of items
    pub fn set_total_count(&mut self, total_count: u64) -> &mut Self {
        self.core.set_total_count(total_count);
        self
    }

    /// Set the number of page links shown
    pub fn set_link_count(&mut self, link_count: u32) -> &mut Self {
        self.core.set_link_count(link_count);
        self
    }

    /// Enable or disable auto-hide
    pub fn set_auto_hide(&mut self, auto_hide: bool) -> &mut Self {
        self.core.set_auto_hide(auto_hide);
        self
    }

    /// Set the template used by [`RequestPager::render`]
    pub fn set_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.core.set_template(template);
        self
    }

    /// Generate URLs without the base URL
    pub fn set_relative_url(&mut self, relative_url: bool) -> &mut Self {
        self.relative_url = relative_url;
        self
    }

    /// Current page as read from the request (or overridden)
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Maximum number of items on a page
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Zero-based offset of the first item on the current page, for queries
    pub fn offset(&self) -> Result<i64> {
        if self.page_size < 1 {
            return Err(Error::invalid_parameter("page_size", self.page_size));
        }
        if self.page < 1 {
            return Err(Error::invalid_parameter("page", self.page));
        }
        (self.page - 1)
            .checked_mul(self.page_size)
            .ok_or_else(|| Error::invalid_parameter("page", self.page))
    }

    /// Pager settings
    pub fn core(&self) -> &PagerCore {
        &self.core
    }

    /// Number of items on the current page
    pub fn current_page_size(&self) -> Result<u64> {
        self.core.current_page_size(self)
    }

    /// Compute the view for the current page
    pub fn view(&self) -> Result<Option<PagerView<'_>>> {
        self.core.view(self, self)
    }

    /// Render the pager with the configured template
    pub fn render(&self) -> Result<String> {
        self.core.render(self, self)
    }
}

impl ParamSource for RequestPager {
    fn current_page(&self) -> i64 {
        self.page
    }

    fn page_size(&self) -> i64 {
        self.page_size
    }
}

impl UrlProvider for RequestPager {
    fn url(&self, page: u64) -> String {
        let mut query = self.request.query.clone();
        let mut params = self.request.params.clone();

        self.page_binding
            .write(&mut query, &mut params, page.to_string());
        if let Some(binding) = &self.page_size_binding {
            binding.write(&mut query, &mut params, self.page_size.to_string());
        }

        let path = match &self.request.route {
            Some(route) => route.uri_lossy(&params),
            None => self.request.path.clone(),
        };

        let query_string = if query.is_empty() {
            String::new()
        } else {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&query)
                .finish();
            format!("?{encoded}")
        };

        let base_url = if self.relative_url {
            ""
        } else {
            self.request.base_url.as_str()
        };

        format!("{base_url}{path}{query_string}")
    }
}
