use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The template is missing from the template directory or fails to parse.
    #[error("Cannot load template '{name}'. Original error: {source}")]
    TemplateError {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// The context does not satisfy the template, or the output could not be
    /// streamed into the destination.
    #[error("Failed to render '{name}'. Original error: {source}")]
    RenderError {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// Renaming a foreign file to its backup name failed. This includes the
    /// backup name already being taken.
    #[error("Cannot back up '{}' to '{}': {source}", .from.display(), .to.display())]
    BackupError {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be read while prompting the operator.
    #[error("Cannot read the answer: {0}.")]
    InputError(String),

    #[error("Invalid context: {0}.")]
    ContextError(String),

    /// The header cannot serve as the first line of a generated file.
    #[error("Invalid header {header:?}: {reason}.")]
    InvalidHeader { header: String, reason: &'static str },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
