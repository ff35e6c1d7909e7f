//! Renders templates into the output directory and stamps the result.
//!
//! A write runs five steps and stops at the first failure, returning its
//! error as is:
//!
//! 1. resolve and parse the template,
//! 2. decide what happens to an existing destination, renaming it to
//!    `<name>.old` when asked to,
//! 3. create or truncate the destination,
//! 4. render into it,
//! 5. put the generation header in front of the rendered content.
//!
//! Nothing is rolled back: a failed render leaves the partially written
//! destination behind, and a failure after a backup rename leaves the
//! original under its backup name.

pub mod decision;
pub mod ownership;

use crate::{
    config::WriterConfig,
    constants::BACKUP_SUFFIX,
    error::{Error, Result},
    ext::PathExt,
    ioutils::prepend_line,
    output::{ConsoleOutput, OutputSink},
    prompt::{resolve_overwrite_choice, AnswerSource, StdinAnswers},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
};
use decision::{DestinationState, OverwriteChoice};
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub use ownership::is_owned;

pub struct TemplateWriter {
    config: WriterConfig,
    renderer: Box<dyn TemplateRenderer>,
    output: Box<dyn OutputSink>,
    answers: Box<dyn AnswerSource>,
}

impl TemplateWriter {
    /// Writer rendering with MiniJinja from the configured template directory,
    /// reporting on the terminal and reading answers from stdin.
    pub fn new(config: WriterConfig) -> Self {
        let renderer = MiniJinjaRenderer::new(config.template_dir());
        Self {
            config,
            renderer: Box::new(renderer),
            output: Box::new(ConsoleOutput::new()),
            answers: Box::new(StdinAnswers::new()),
        }
    }

    pub fn with_renderer(mut self, renderer: impl TemplateRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn with_output(mut self, output: impl OutputSink + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    pub fn with_answers(mut self, answers: impl AnswerSource + 'static) -> Self {
        self.answers = Box::new(answers);
        self
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Where `filename` ends up in the output directory.
    pub fn destination(&self, filename: &str) -> PathBuf {
        self.config.output_dir().join(filename)
    }

    /// Renders `template_name` with `context` into `filename` under the output
    /// directory and stamps it with the generation header.
    ///
    /// # Arguments
    /// * `template_name` - Template name, relative to the template directory
    /// * `filename` - Destination, relative to the output directory
    /// * `context` - Values the template refers to
    ///
    /// # Returns
    /// * `Result<()>` - The error of the first step that failed
    pub fn write(
        &mut self,
        template_name: &str,
        filename: &str,
        context: &serde_json::Value,
    ) -> Result<()> {
        self.renderer.resolve(template_name)?;

        let destination = self.destination(filename);
        if self.overwrite_choice(&destination)? == OverwriteChoice::Rename {
            self.backup(&destination, filename)?;
        }

        let file = File::create(&destination)?;
        self.output.progress(&format!("----> Writing {filename}..."));
        self.render_into(file, template_name, context)?;

        prepend_line(&destination, self.config.header_line())?;
        info!("Generated {} from {template_name}", destination.display());
        Ok(())
    }

    /// Renders without touching the output directory. This is exactly the
    /// content that follows the header in a written file.
    pub fn render(&self, template_name: &str, context: &serde_json::Value) -> Result<String> {
        self.renderer.render(template_name, context)
    }

    fn overwrite_choice(&mut self, destination: &Path) -> Result<OverwriteChoice> {
        let state = DestinationState::inspect(
            destination,
            self.config.header_line(),
            self.config.is_interactive(),
        );
        debug!("{} is {state:?}", destination.display());

        match state.automatic_choice() {
            Some(choice) => Ok(choice),
            None => resolve_overwrite_choice(
                &mut *self.answers,
                &*self.output,
                &destination.display_name(),
            ),
        }
    }

    /// Moves a foreign file to `<name>.old`. An existing backup is never
    /// replaced.
    fn backup(&self, destination: &Path, filename: &str) -> Result<()> {
        let backup = destination.backup_path();
        if backup.exists() {
            return Err(Error::BackupError {
                from: destination.to_path_buf(),
                to: backup,
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "backup file already exists",
                ),
            });
        }

        std::fs::rename(destination, &backup).map_err(|source| Error::BackupError {
            from: destination.to_path_buf(),
            to: backup.clone(),
            source,
        })?;
        self.output
            .progress(&format!("----> Renaming {filename} to {filename}{BACKUP_SUFFIX}..."));
        Ok(())
    }

    fn render_into(
        &self,
        file: File,
        template_name: &str,
        context: &serde_json::Value,
    ) -> Result<()> {
        let mut out = BufWriter::new(file);
        self.renderer.render_to(template_name, context, &mut out)?;
        out.flush().map_err(Error::IoError)
    }
}
