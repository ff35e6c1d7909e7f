use crate::{
    constants::TEMPLATE_HEADER,
    error::{Error, Result},
};
use std::path::{Path, PathBuf};

/// Settings a [`TemplateWriter`](crate::writer::TemplateWriter) is created
/// with. They do not change for the lifetime of the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    template_dir: PathBuf,
    output_dir: PathBuf,
    interactive: bool,
    header: String,
}

impl WriterConfig {
    /// Non-interactive configuration using the default header.
    pub fn new<T: Into<PathBuf>, O: Into<PathBuf>>(template_dir: T, output_dir: O) -> Self {
        Self {
            template_dir: template_dir.into(),
            output_dir: output_dir.into(),
            interactive: false,
            header: TEMPLATE_HEADER.to_string(),
        }
    }

    /// Whether the operator is asked before a foreign file is replaced.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Replaces the first line stamped into generated files.
    ///
    /// The header must be a single non-empty line, otherwise generated files
    /// could not be told apart from foreign ones.
    pub fn header<S: Into<String>>(mut self, header: S) -> Result<Self> {
        let header = header.into();
        let reason = if header.is_empty() {
            Some("it is empty")
        } else if header.contains(['\n', '\r']) {
            Some("it spans more than one line")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(Error::InvalidHeader { header, reason });
        }
        self.header = header;
        Ok(self)
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn header_line(&self) -> &str {
        &self.header
    }
}
