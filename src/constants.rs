//! Constants used throughout starter-writer

/// First line stamped into every generated file
pub const TEMPLATE_HEADER: &str = "# Generated by Cloud66 Starter";

/// Suffix appended to a foreign file when it is moved out of the way
pub const BACKUP_SUFFIX: &str = ".old";

/// Template suffixes stripped when the destination name is derived from the template name
pub const TEMPLATE_SUFFIXES: &[&str] = &[".tmpl", ".j2"];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Answers accepted by the overwrite prompt
pub mod answers {
    pub const OVERWRITE: &str = "o";
    pub const RENAME: &str = "r";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
