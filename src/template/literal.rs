// ABOUTME: Literal placeholder substitution without a template engine
// ABOUTME: Replaces exact `{{ name }}` markers and leaves every other byte untouched

use super::context::TemplateContext;
use super::engine::Renderer;
use super::error::Result;

const MARKER_OPEN: &str = "{{ ";
const MARKER_CLOSE: &str = " }}";

/// Replaces the exact marker `{{ name }}` for each variable in the context.
///
/// Unlike [`TemplateEngine`](super::TemplateEngine) this never fails: markers
/// for unknown variables, spacing variants such as `{{name}}`, and malformed
/// braces all pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralRenderer;

impl LiteralRenderer {
    pub fn new() -> Self {
        Self
    }

    /// The marker replaced for a variable name
    pub fn marker(name: &str) -> String {
        format!("{{{{ {} }}}}", name)
    }

    /// Length and value of a known marker at the start of `text`
    fn match_marker<'a>(text: &str, context: &'a TemplateContext) -> Option<(usize, &'a String)> {
        let inner = &text[MARKER_OPEN.len()..];
        let end = inner.find(MARKER_CLOSE)?;
        let value = context.get_variable(&inner[..end])?;
        Some((MARKER_OPEN.len() + end + MARKER_CLOSE.len(), value))
    }
}

impl Renderer for LiteralRenderer {
    /// Single pass over the template, so substituted values are never rescanned
    fn render(&self, template: &str, context: &TemplateContext) -> Result<String> {
        let mut rendered = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(MARKER_OPEN) {
            rendered.push_str(&rest[..start]);
            let candidate = &rest[start..];

            match Self::match_marker(candidate, context) {
                Some((len, value)) => {
                    rendered.push_str(value.trim());
                    rest = &candidate[len..];
                }
                None => {
                    // Keep the braces and retry from just past them
                    rendered.push_str("{{");
                    rest = &candidate[2..];
                }
            }
        }

        rendered.push_str(rest);
        Ok(rendered)
    }
}
