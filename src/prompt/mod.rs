//! Asking the operator what to do with a foreign file.
//!
//! - `interface`: where answers come from (stdin, or any scripted reader)
//! - this module: turning answers into an [`OverwriteChoice`]

use crate::{
    constants::answers,
    error::Result,
    output::OutputSink,
    writer::decision::OverwriteChoice,
};
use log::debug;

pub mod interface;

pub use interface::{AnswerSource, LineAnswers, StdinAnswers};

/// The question shown for a destination that exists and is not ours.
pub fn overwrite_question(file_name: &str) -> String {
    format!(
        "{file_name} cannot be written as it already exists. What to do? [o: overwrite, R: rename]"
    )
}

/// Interprets one raw answer. Case and surrounding whitespace are ignored and
/// an empty answer takes the capitalized default, rename.
///
/// # Returns
/// * `None` - The answer is not recognized and the question must be asked again
pub fn parse_answer(raw: &str) -> Option<OverwriteChoice> {
    match raw.trim().to_lowercase().as_str() {
        answers::OVERWRITE => Some(OverwriteChoice::Overwrite),
        answers::RENAME | "" => Some(OverwriteChoice::Rename),
        _ => None,
    }
}

/// Asks until the operator gives a recognized answer.
///
/// # Arguments
/// * `source` - Where answers are read from
/// * `output` - Where the question is shown
/// * `file_name` - Name of the existing file, as shown to the operator
///
/// # Returns
/// * `Result<OverwriteChoice>` - `Error::InputError` if the source fails or runs dry
pub fn resolve_overwrite_choice(
    source: &mut dyn AnswerSource,
    output: &dyn OutputSink,
    file_name: &str,
) -> Result<OverwriteChoice> {
    let question = overwrite_question(file_name);
    loop {
        output.prompt(&question);
        let answer = source.read_answer()?;
        match parse_answer(&answer) {
            Some(choice) => {
                debug!("Operator chose {choice:?} for {file_name}");
                return Ok(choice);
            }
            None => debug!("Rejected answer '{}' for {file_name}", answer.trim()),
        }
    }
}
