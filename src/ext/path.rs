use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::BACKUP_SUFFIX;

/// Extension trait for Path with the naming rules used when writing files
pub trait PathExt {
    /// Returns the sibling path a foreign file is renamed to before it is
    /// overwritten: the same file name with [`BACKUP_SUFFIX`] appended.
    ///
    /// # Examples
    /// ```
    /// use starter_writer::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// let path = Path::new("out/app.yml");
    /// assert_eq!(path.backup_path(), PathBuf::from("out/app.yml.old"));
    /// ```
    fn backup_path(&self) -> PathBuf;

    /// Returns the last component of the path for user-facing messages,
    /// falling back to the whole path when there is none.
    ///
    /// # Examples
    /// ```
    /// use starter_writer::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert_eq!(Path::new("out/app.yml").display_name(), "app.yml");
    /// ```
    fn display_name(&self) -> String;
}

impl PathExt for Path {
    fn backup_path(&self) -> PathBuf {
        let mut name: OsString =
            self.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(BACKUP_SUFFIX);
        self.with_file_name(name)
    }

    fn display_name(&self) -> String {
        match self.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.display().to_string(),
        }
    }
}
