use starter_writer::{output::CapturedOutput, prompt::LineAnswers, TemplateWriter, WriterConfig};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER: &str = "# Generated by Cloud66 Starter";

/// A template directory and an output directory that live as long as the test.
pub struct Workspace {
    pub templates: TempDir,
    pub out: TempDir,
    pub output: CapturedOutput,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            templates: tempfile::tempdir().unwrap(),
            out: tempfile::tempdir().unwrap(),
            output: CapturedOutput::new(),
        }
    }

    pub fn with_template(self, name: &str, source: &str) -> Self {
        fs::write(self.templates.path().join(name), source).unwrap();
        self
    }

    pub fn existing(&self, name: &str, content: &str) {
        fs::write(self.path(name), content).unwrap();
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.out.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }

    /// Writer whose operator answers come from `script`, one per line.
    pub fn writer(&self, interactive: bool, script: &str) -> TemplateWriter {
        let config =
            WriterConfig::new(self.templates.path(), self.out.path()).interactive(interactive);
        TemplateWriter::new(config)
            .with_output(self.output.clone())
            .with_answers(LineAnswers::new(Cursor::new(script.to_string())))
    }
}
