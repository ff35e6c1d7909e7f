use crate::ioutils::read_first_line;
use log::warn;
use std::path::Path;

/// Whether the file at `path` was produced by this tool, i.e. its first line
/// is exactly `header`.
///
/// A file that cannot be read counts as not owned.
pub fn is_owned<P: AsRef<Path>>(path: P, header: &str) -> bool {
    let path = path.as_ref();
    match read_first_line(path) {
        Ok(first_line) => first_line == header.as_bytes(),
        Err(e) => {
            warn!("Cannot inspect {}: {e}", path.display());
            false
        }
    }
}
