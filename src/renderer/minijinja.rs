use super::filters::add_filters;
use crate::{
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
};
use log::debug;
use minijinja::{path_loader, AutoEscape, Environment, Template, UndefinedBehavior};
use std::io::Write;
use std::path::{Path, PathBuf};

/// MiniJinja-based template rendering engine reading templates from a directory.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
    /// Directory the template names are resolved against
    template_dir: PathBuf,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that loads templates from `template_dir`.
    ///
    /// Undefined variables are errors, trailing newlines are kept and output
    /// is never HTML-escaped.
    pub fn new<P: AsRef<Path>>(template_dir: P) -> Self {
        let template_dir = template_dir.as_ref().to_path_buf();
        let mut env = Environment::new();
        env.set_loader(path_loader(template_dir.clone()));
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        add_filters(&mut env);

        Self { env, template_dir }
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    fn load(&self, name: &str) -> Result<Template<'_, '_>> {
        debug!("Loading template '{}' from {}", name, self.template_dir.display());
        self.env
            .get_template(name)
            .map_err(|source| Error::TemplateError { name: name.to_string(), source })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn resolve(&self, name: &str) -> Result<()> {
        self.load(name).map(|_| ())
    }

    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        self.load(name)?
            .render(context)
            .map_err(|source| Error::RenderError { name: name.to_string(), source })
    }

    fn render_to(
        &self,
        name: &str,
        context: &serde_json::Value,
        out: &mut dyn Write,
    ) -> Result<()> {
        self.load(name)?
            .render_to_write(context, out)
            .map(|_| ())
            .map_err(|source| Error::RenderError { name: name.to_string(), source })
    }
}
