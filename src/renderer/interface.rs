use crate::error::Result;
use std::io::Write;

/// Trait for template rendering engines.
///
/// Templates are addressed by name; how a name maps onto a source is up to
/// the implementation.
pub trait TemplateRenderer {
    /// Loads and parses the named template without rendering it.
    ///
    /// # Arguments
    /// * `name` - Name of the template, relative to the template source
    ///
    /// # Returns
    /// * `Result<()>` - `Error::TemplateError` if the template is missing or malformed
    fn resolve(&self, name: &str) -> Result<()>;

    /// Renders the named template into a string.
    ///
    /// # Arguments
    /// * `name` - Name of the template
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;

    /// Renders the named template, streaming the output into `out`.
    ///
    /// Output written before a failure stays in `out`.
    ///
    /// # Arguments
    /// * `name` - Name of the template
    /// * `context` - Context variables for rendering
    /// * `out` - Destination of the rendered output
    fn render_to(
        &self,
        name: &str,
        context: &serde_json::Value,
        out: &mut dyn Write,
    ) -> Result<()>;
}
