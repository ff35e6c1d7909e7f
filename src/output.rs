//! Where the writer's human-readable messages go.
//!
//! Progress lines and the overwrite prompt are not part of any contract; they
//! go through [`OutputSink`] so a terminal is never required to exercise the
//! writer.

use dialoguer::console::{style, Term};
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives the writer's progress messages and prompts.
pub trait OutputSink {
    /// Announces an action such as writing or renaming a file.
    fn progress(&self, message: &str);

    /// Shows a question the operator is expected to answer on the next line.
    fn prompt(&self, message: &str);
}

/// Colored terminal output on stdout.
pub struct ConsoleOutput {
    term: Term,
}

impl ConsoleOutput {
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ConsoleOutput {
    fn progress(&self, message: &str) {
        if let Err(e) = self.term.write_line(&format!(" {}", style(message).green())) {
            warn!("Cannot write to the terminal: {e}");
        }
    }

    fn prompt(&self, message: &str) {
        let line = format!(" {} ", style(message).yellow().bold());
        if let Err(e) = self.term.write_str(&line).and_then(|_| self.term.flush()) {
            warn!("Cannot write to the terminal: {e}");
        }
    }
}

/// Message recorded by [`CapturedOutput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Captured {
    Progress(String),
    Prompt(String),
}

/// Records every message in memory. Clones share the same record, so one
/// clone can be handed to a writer and the other inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    messages: Rc<RefCell<Vec<Captured>>>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<Captured> {
        self.messages.borrow().clone()
    }

    pub fn progress_messages(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter_map(|m| match m {
                Captured::Progress(text) => Some(text.clone()),
                Captured::Prompt(_) => None,
            })
            .collect()
    }

    pub fn prompt_count(&self) -> usize {
        self.messages.borrow().iter().filter(|m| matches!(m, Captured::Prompt(_))).count()
    }
}

impl OutputSink for CapturedOutput {
    fn progress(&self, message: &str) {
        self.messages.borrow_mut().push(Captured::Progress(message.to_string()));
    }

    fn prompt(&self, message: &str) {
        self.messages.borrow_mut().push(Captured::Prompt(message.to_string()));
    }
}
