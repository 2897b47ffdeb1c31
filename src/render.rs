//! Built-in pager templates
//!
//! Renders a [`PagerView`] to HTML. Three templates are built in:
//!
//! - `pager` - link list followed by the item summary
//! - `links` - link list only
//! - `summary` - item summary only
//!
//! A hidden pager (`None`) always renders as the empty string.

use crate::error::{Error, Result};
use crate::pagination::{NavLink, PagerView};
use crate::template::{self, TemplateContext};
use maud::{html, Markup};
use serde_json::json;

/// Names of the built-in templates
pub const BUILTIN_TEMPLATES: &[&str] = &["pager", "links", "summary"];

/// Item summary line
const SUMMARY_TEMPLATE: &str =
    "Items {{ first_item_offset }} - {{ last_item_offset }} of {{ total_count }} ({{ page_count }} pages)";

/// Check if a template name is built in
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TEMPLATES.contains(&name)
}

/// Render a view with the named template
pub fn render(view: Option<&PagerView<'_>>, template_name: &str) -> Result<String> {
    if !is_builtin(template_name) {
        return Err(Error::template(format!(
            "Unknown template '{template_name}'"
        )));
    }

    let Some(view) = view else {
        return Ok(String::new());
    };

    let markup = match template_name {
        "links" => links(view),
        "summary" => summary_block(&summary(view)?),
        _ => {
            let text = summary(view)?;
            html! {
                (links(view))
                (summary_block(&text))
            }
        }
    };
    Ok(markup.into_string())
}

/// Item summary text, e.g. `Items 11 - 20 of 45 (5 pages)`
///
/// Only reads the counters of the view, so no link URL is built.
pub fn summary(view: &PagerView<'_>) -> Result<String> {
    let ctx = TemplateContext::with_values(json!({
        "first_item_offset": view.first_item_offset,
        "last_item_offset": view.last_item_offset,
        "total_count": view.total_count,
        "page_count": view.page_count,
    }));
    template::render(SUMMARY_TEMPLATE, &ctx)
}

/// Link list: navigation links around the numbered window
pub fn links(view: &PagerView<'_>) -> Markup {
    html! {
        ul.pager {
            (nav_item(&view.first_page, "First"))
            (nav_item(&view.prev_page, "Previous"))
            @for link in &view.before_links {
                li { a href=(link.url) { (link.page) } }
            }
            li.current { (view.current_page) }
            @for link in &view.after_links {
                li { a href=(link.url) { (link.page) } }
            }
            (nav_item(&view.next_page, "Next"))
            (nav_item(&view.last_page, "Last"))
        }
    }
}

fn summary_block(text: &str) -> Markup {
    html! {
        div.pager { (text) }
    }
}

fn nav_item(link: &NavLink, label: &str) -> Markup {
    html! {
        @if let NavLink::Shown(url) = link {
            li { a href=(url) { (label) } }
        }
    }
}
