//! Abstract source of operator answers, independent of the terminal.

use crate::error::{Error, Result};
use dialoguer::console::Term;
use std::io::BufRead;

/// Supplies one raw answer per call. The caller interprets it.
pub trait AnswerSource {
    fn read_answer(&mut self) -> Result<String>;
}

/// Reads answers line by line from any buffered reader.
///
/// End of input is an [`Error::InputError`]: a closed stdin never counts as
/// permission to touch a file.
pub struct LineAnswers<R> {
    reader: R,
}

impl<R: BufRead> LineAnswers<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> AnswerSource for LineAnswers<R> {
    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(Error::InputError("standard input is closed".to_string())),
            Ok(_) => Ok(line),
            Err(e) => Err(Error::InputError(e.to_string())),
        }
    }
}

/// Reads answers from the operator's terminal. When stdin is not a terminal
/// (answers piped in by a script) lines are read from stdin directly, so end
/// of input is still reported.
#[derive(Debug, Clone)]
pub struct StdinAnswers {
    term: Term,
}

impl StdinAnswers {
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for StdinAnswers {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerSource for StdinAnswers {
    fn read_answer(&mut self) -> Result<String> {
        if self.term.is_term() {
            self.term.read_line().map_err(|e| Error::InputError(e.to_string()))
        } else {
            LineAnswers::new(std::io::stdin().lock()).read_answer()
        }
    }
}
