use crate::{
    cli::Args,
    config::WriterConfig,
    constants::STDIN_INDICATOR,
    error::{Error, Result},
    ioutils::{parse_string_to_json, read_context_file, read_from},
    writer::TemplateWriter,
};
use log::debug;

/// Builds the template context from whichever source the arguments name.
/// Without one the context is an empty object.
///
/// Reading the context from stdin consumes all of it, so it cannot be
/// combined with prompting.
pub fn load_context(args: &Args) -> Result<serde_json::Value> {
    if args.prompt && args.context.as_deref() == Some(STDIN_INDICATOR) {
        return Err(Error::ContextError(
            "'--context -' reads all of stdin and cannot be combined with --prompt".to_string(),
        ));
    }
    if let Some(path) = &args.context_file {
        debug!("Reading context from {}", path.display());
        return read_context_file(path);
    }
    match args.context.as_deref() {
        Some(STDIN_INDICATOR) => {
            debug!("Reading context from stdin");
            parse_string_to_json(&read_from(std::io::stdin())?)
        }
        Some(text) => parse_string_to_json(text),
        None => Ok(serde_json::Value::Object(serde_json::Map::new())),
    }
}

pub fn writer_config(args: &Args) -> Result<WriterConfig> {
    let config =
        WriterConfig::new(&args.template_dir, &args.output_dir).interactive(args.prompt);
    match &args.header {
        Some(header) => config.header(header.clone()),
        None => Ok(config),
    }
}

/// Renders the requested template once.
pub fn run(args: Args) -> Result<()> {
    let context = load_context(&args)?;
    let destination = args.destination();
    let mut writer = TemplateWriter::new(writer_config(&args)?);
    writer.write(&args.template, &destination, &context)?;
    debug!("Finished writing {}", writer.destination(&destination).display());
    Ok(())
}
