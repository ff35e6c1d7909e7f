use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Returns the first line of a file without its `\n` terminator.
///
/// Only the first line is read, so sniffing a large file stays cheap.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<u8>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    Ok(line)
}

/// Rewrites the file with `line` in front of its current content.
///
/// The whole file is read and written back, which is fine for the small
/// configuration files this crate produces.
pub fn prepend_line<P: AsRef<Path>>(path: P, line: &str) -> Result<()> {
    let path = path.as_ref();
    let content = std::fs::read(path)?;

    let mut stamped = Vec::with_capacity(line.len() + 1 + content.len());
    stamped.extend_from_slice(line.as_bytes());
    stamped.push(b'\n');
    stamped.extend_from_slice(&content);

    std::fs::write(path, stamped).map_err(Error::IoError)
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

/// Parses a JSON document into a template context.
pub fn parse_string_to_json(buf: &str) -> Result<serde_json::Value> {
    if buf.trim().is_empty() {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(buf).map_err(|e| Error::ContextError(e.to_string()))
}

/// Loads a template context from a `.json`, `.yml` or `.yaml` file.
pub fn read_context_file<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yml") | Some("yaml") => serde_yaml::from_str(&content)
            .map_err(|e| Error::ContextError(format!("{}: {e}", path.display()))),
        Some("json") => parse_string_to_json(&content),
        _ => Err(Error::ContextError(format!(
            "unsupported context file '{}', expected .json, .yml or .yaml",
            path.display()
        ))),
    }
}
