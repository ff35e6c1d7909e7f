use crate::constants::{verbosity, TEMPLATE_SUFFIXES};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for starter-writer.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Template name, relative to the template directory.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Destination file name, relative to the output directory. Defaults to
    /// the template name without its `.tmpl` or `.j2` suffix.
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<String>,

    /// Directory templates are loaded from.
    #[arg(short, long = "templates", default_value = ".")]
    pub template_dir: PathBuf,

    /// Directory generated files are written to.
    #[arg(short, long = "output", default_value = ".")]
    pub output_dir: PathBuf,

    /// Template context as a JSON string or `-` to read from stdin.
    #[arg(short, long, conflicts_with = "context_file")]
    pub context: Option<String>,

    /// Template context from a `.json`, `.yml` or `.yaml` file.
    #[arg(long = "context-file")]
    pub context_file: Option<PathBuf>,

    /// Ask before replacing an existing file this tool did not generate.
    #[arg(short, long)]
    pub prompt: bool,

    /// First line stamped into generated files.
    #[arg(long)]
    pub header: Option<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The destination given on the command line, or one derived from the
    /// template name.
    pub fn destination(&self) -> String {
        if let Some(destination) = &self.destination {
            return destination.clone();
        }
        TEMPLATE_SUFFIXES
            .iter()
            .find_map(|suffix| self.template.strip_suffix(suffix))
            .filter(|stripped| !stripped.is_empty())
            .unwrap_or(self.template.as_str())
            .to_string()
    }
}

pub fn parse_cli() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
