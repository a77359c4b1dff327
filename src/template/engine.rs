// ABOUTME: Handlebars-backed template engine for rendering cloud-init templates
// ABOUTME: Renders `{{ name }}` placeholders in strict mode with HTML escaping disabled

use handlebars::Handlebars;
use tracing::debug;

use super::context::TemplateContext;
use super::error::{Result, TemplateError};
use super::helpers;

/// Turns template text plus a context into rendered output
pub trait Renderer {
    fn render(&self, template: &str, context: &TemplateContext) -> Result<String>;
}

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    keep_trailing_newline: bool,
}

impl TemplateEngine {
    /// Create a new template engine with all built-in helpers
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // A placeholder without a value is an error, not an empty string
        handlebars.set_strict_mode(true);
        handlebars.set_dev_mode(false);

        // Output is YAML and shell, keys contain `+`, `/` and `=`
        handlebars.register_escape_fn(handlebars::no_escape);

        helpers::register_helpers(&mut handlebars);

        Self {
            handlebars,
            keep_trailing_newline: false,
        }
    }

    /// Keep a single trailing newline of the template in the output
    pub fn keep_trailing_newline(mut self, keep: bool) -> Self {
        self.keep_trailing_newline = keep;
        self
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        handlebars::Template::compile(template)
            .map(|_| ())
            .map_err(|e| TemplateError::SyntaxError(e.to_string()))
    }

    /// Check if a string contains template expressions
    pub fn has_templates(&self, text: &str) -> bool {
        text.contains("{{") && text.contains("}}")
    }

    /// Register a custom helper function
    pub fn register_helper<F>(&mut self, name: &str, helper: F)
    where
        F: handlebars::HelperDef + Send + Sync + 'static,
    {
        self.handlebars.register_helper(name, Box::new(helper));
    }

    fn source<'a>(&self, template: &'a str) -> &'a str {
        if self.keep_trailing_newline {
            return template;
        }
        template
            .strip_suffix("\r\n")
            .or_else(|| template.strip_suffix('\n'))
            .unwrap_or(template)
    }
}

impl Renderer for TemplateEngine {
    fn render(&self, template: &str, context: &TemplateContext) -> Result<String> {
        let source = self.source(template);
        self.validate_template(source)?;

        let json_context = context.to_json()?;
        let rendered = self.handlebars.render_template(source, &json_context)?;

        debug!(
            "Rendered template with {} variables, {} characters",
            context.len(),
            rendered.len()
        );
        Ok(rendered)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
