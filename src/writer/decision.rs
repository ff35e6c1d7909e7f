use super::ownership::is_owned;
use std::path::Path;

/// What the writer found at a destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationState {
    NotExists,
    /// First line is the generation header.
    OwnedByTool,
    ForeignNonInteractive,
    /// Foreign file and the operator has to decide.
    ForeignInteractive,
}

/// How an existing destination is dealt with before new content is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteChoice {
    /// Truncate and write in place.
    Overwrite,
    /// Move the existing file to its backup name first.
    Rename,
}

impl DestinationState {
    pub fn inspect(path: &Path, header: &str, interactive: bool) -> Self {
        if !path.exists() {
            DestinationState::NotExists
        } else if is_owned(path, header) {
            DestinationState::OwnedByTool
        } else if interactive {
            DestinationState::ForeignInteractive
        } else {
            DestinationState::ForeignNonInteractive
        }
    }

    /// The choice that follows from the state alone, or `None` when the
    /// operator must be asked.
    ///
    /// Foreign files in non-interactive runs are replaced without a backup.
    pub fn automatic_choice(self) -> Option<OverwriteChoice> {
        match self {
            DestinationState::NotExists
            | DestinationState::OwnedByTool
            | DestinationState::ForeignNonInteractive => Some(OverwriteChoice::Overwrite),
            DestinationState::ForeignInteractive => None,
        }
    }
}
