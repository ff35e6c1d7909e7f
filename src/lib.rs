/// Handles argument parsing for the `starter-writer` binary.
pub mod cli;

/// Writer settings.
pub mod config;

pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Progress and prompt output.
pub mod output;

/// Operator answers for the overwrite question.
pub mod prompt;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Renders templates to disk and stamps the generated files.
pub mod writer;

pub use config::WriterConfig;
pub use writer::{is_owned, TemplateWriter};
