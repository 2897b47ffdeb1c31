//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, PagerConfig};
use crate::error::{Result, ResultExt};
use crate::pagination::{FixedParams, PagerCore, PagerView, UrlPattern};
use crate::render;
use crate::request::{Request, RequestPager};
use crate::types::ParamLocation;
use tracing::{debug, info};

/// Options of the `request` command
#[derive(Debug)]
struct RequestOptions<'a> {
    url: &'a str,
    total: u64,
    fixed_page_size: Option<i64>,
    page_src: Option<ParamLocation>,
    page_key: Option<&'a str>,
    pagesize_src: Option<ParamLocation>,
    pagesize_key: Option<&'a str>,
    link_count: Option<u32>,
    relative: bool,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::View {
                total,
                page,
                page_size,
                link_count,
                url,
                auto_hide,
                template,
            } => {
                let config = self.load_config()?;
                let mut core = PagerCore::from_config(&config);
                core.set_total_count(*total);
                if let Some(link_count) = link_count {
                    core.set_link_count(*link_count);
                }
                if let Some(auto_hide) = auto_hide {
                    core.set_auto_hide(*auto_hide);
                }
                if let Some(template) = template {
                    core.set_template(template.as_str());
                }

                let urls = UrlPattern::new(url.as_str())?;
                let params = FixedParams::new(*page, *page_size);
                let view = core.view(&params, &urls)?;
                self.format_view(view.as_ref(), core.template())
            }
            Commands::Request {
                url,
                total,
                fixed_page_size,
                page_src,
                page_key,
                pagesize_src,
                pagesize_key,
                link_count,
                relative,
            } => self.request(&RequestOptions {
                url,
                total: *total,
                fixed_page_size: *fixed_page_size,
                page_src: *page_src,
                page_key: page_key.as_deref(),
                pagesize_src: *pagesize_src,
                pagesize_key: pagesize_key.as_deref(),
                link_count: *link_count,
                relative: *relative,
            }),
            Commands::Config => {
                let config = self.load_config()?;
                Ok(serde_yaml::to_string(&config)?)
            }
        }
    }

    /// Load the configuration file, or defaults when none is given
    fn load_config(&self) -> Result<PagerConfig> {
        match &self.cli.config {
            Some(path) => {
                info!("Loading pager config from {}", path.display());
                load_config(path)
            }
            None => Ok(PagerConfig::default()),
        }
    }

    fn request(&self, opts: &RequestOptions<'_>) -> Result<String> {
        let config = self.load_config()?;
        let request =
            Request::parse(opts.url).with_context(|| format!("Bad request URL '{}'", opts.url))?;

        let mut builder = RequestPager::builder(request, &config);
        if let Some(src) = opts.page_src {
            builder = builder.page_source(src);
        }
        if let Some(key) = opts.page_key {
            builder = builder.page_key(key);
        }
        if let Some(src) = opts.pagesize_src {
            builder = builder.page_size_source(src);
        }
        if let Some(key) = opts.pagesize_key {
            builder = builder.page_size_key(key);
        }
        if let Some(size) = opts.fixed_page_size {
            builder = builder.fixed_page_size(size);
        }

        let mut pager = builder.build()?;
        pager
            .set_total_count(opts.total)
            .set_relative_url(opts.relative);
        if let Some(link_count) = opts.link_count {
            pager.set_link_count(link_count);
        }
        debug!(page = pager.page(), page_size = pager.page_size(), "request pager ready");

        let view = pager.view()?;
        self.format_view(view.as_ref(), pager.core().template())
    }

    fn format_view(&self, view: Option<&PagerView<'_>>, template: &str) -> Result<String> {
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&view)?),
            OutputFormat::Html => render::render(view, template),
            OutputFormat::Pretty => match view {
                Some(view) => Ok(format!(
                    "{}\n{}",
                    pretty_links(view),
                    render::summary(view)?
                )),
                None => Ok("(single page, pager hidden)".to_string()),
            },
        }
    }
}

/// One-line text rendering, e.g. `« ‹ 1 2 [3] 4 5 › »`
fn pretty_links(view: &PagerView<'_>) -> String {
    let mut words: Vec<String> = Vec::new();
    if view.first_page.is_shown() {
        words.push("«".to_string());
    }
    if view.prev_page.is_shown() {
        words.push("‹".to_string());
    }
    words.extend(view.before_links.pages().map(|page| page.to_string()));
    words.push(format!("[{}]", view.current_page));
    words.extend(view.after_links.pages().map(|page| page.to_string()));
    if view.next_page.is_shown() {
        words.push("›".to_string());
    }
    if view.last_page.is_shown() {
        words.push("»".to_string());
    }
    words.join(" ")
}
