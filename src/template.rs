//! Template interpolation
//!
//! Handles `{{ variable }}` interpolation in URL patterns, route patterns and
//! the pager summary line. Supports nested access like `{{ view.page_count }}`.

use crate::error::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Regex for matching template variables: {{ variable.path }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*)\s*\}\}").unwrap()
});

/// Context for template interpolation
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    /// Variables available to the template, as a JSON object
    pub values: Value,
}

impl TemplateContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self {
            values: Value::Object(serde_json::Map::new()),
        }
    }

    /// Create context with the given values
    pub fn with_values(values: Value) -> Self {
        Self { values }
    }

    /// Set a top-level variable
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        if !self.values.is_object() {
            self.values = Value::Object(serde_json::Map::new());
        }
        if let Value::Object(map) = &mut self.values {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// Get a value by path (e.g., "page" or "route.id")
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.values;
        for part in path.split('.') {
            match current {
                Value::Object(map) => {
                    current = map.get(part)?;
                }
                _ => return None,
            }
        }
        Some(current)
    }
}

/// Render a template string with the given context
pub fn render(template: &str, ctx: &TemplateContext) -> Result<String> {
    let mut result = template.to_string();
    let mut errors = Vec::new();

    for cap in TEMPLATE_REGEX.captures_iter(template) {
        let full_match = &cap[0];
        let var_path = &cap[1];

        match ctx.get(var_path) {
            Some(value) => {
                let replacement = value_to_string(value);
                result = result.replace(full_match, &replacement);
            }
            None => {
                errors.push(var_path.to_string());
            }
        }
    }

    if errors.is_empty() {
        Ok(result)
    } else {
        Err(Error::undefined_var(errors.join(", ")))
    }
}

/// Render a template, leaving undefined variables in place instead of failing
pub fn render_optional(template: &str, ctx: &TemplateContext) -> String {
    let mut result = template.to_string();

    for cap in TEMPLATE_REGEX.captures_iter(template) {
        let full_match = &cap[0];
        let var_path = &cap[1];

        if let Some(value) = ctx.get(var_path) {
            let replacement = value_to_string(value);
            result = result.replace(full_match, &replacement);
        }
    }

    result
}

/// Extract all variable names from a template
pub fn extract_variables(template: &str) -> Vec<String> {
    TEMPLATE_REGEX
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Convert a JSON value to a string for template substitution
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // For complex types, use JSON serialization
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_substitution() {
        let ctx = TemplateContext::with_values(json!({ "page": 3 }));

        let result = render("/items?page={{ page }}", &ctx).unwrap();
        assert_eq!(result, "/items?page=3");
    }

    #[test]
    fn test_multiple_substitutions() {
        let ctx = TemplateContext::with_values(json!({
            "category": "books",
            "page": 12
        }));

        let result = render("/{{ category }}/page/{{page}}", &ctx).unwrap();
        assert_eq!(result, "/books/page/12");
    }

    #[test]
    fn test_nested_value() {
        let ctx = TemplateContext::with_values(json!({
            "view": { "page_count": 7 }
        }));

        let result = render("{{ view.page_count }} pages", &ctx).unwrap();
        assert_eq!(result, "7 pages");
    }

    #[test]
    fn test_undefined_variable() {
        let ctx = TemplateContext::new();
        let err = render("/items/{{ page }}", &ctx).unwrap_err();
        assert!(matches!(err, Error::UndefinedVariable { variable } if variable == "page"));
    }

    #[test]
    fn test_render_optional_keeps_unknown() {
        let mut ctx = TemplateContext::new();
        ctx.set("page", 2);

        let result = render_optional("/{{ section }}/{{ page }}", &ctx);
        assert_eq!(result, "/{{ section }}/2");
    }

    #[test]
    fn test_null_renders_empty() {
        let ctx = TemplateContext::with_values(json!({ "next": null }));
        assert_eq!(render("[{{ next }}]", &ctx).unwrap(), "[]");
    }

    #[test]
    fn test_extract_variables() {
        let vars = extract_variables("/{{ category }}/{{ page }}?size={{ page_size }}");
        assert_eq!(vars, vec!["category", "page", "page_size"]);
    }
}
