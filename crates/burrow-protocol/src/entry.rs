//! Directory entries
//!
//! One entry per listing line. The type code decides how a row is shown:
//! ```text
//! i  → Info       (plain text row)
//! 1  → Directory  (navigable)
//! *  → File       (everything else, including errors and unknown codes)
//! ```

use serde::{Deserialize, Serialize};

use crate::target::Target;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Informational text, not a link
    Info,
    /// Another directory listing
    Directory,
    /// Any other resource
    File,
}

impl EntryKind {
    pub const INFO_CODE: char = 'i';
    pub const DIRECTORY_CODE: char = '1';

    /// Map a type code to its kind. Never fails: unknown codes are files.
    pub fn from_code(code: char) -> Self {
        match code {
            Self::INFO_CODE => EntryKind::Info,
            Self::DIRECTORY_CODE => EntryKind::Directory,
            _ => EntryKind::File,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Info => "info",
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub kind: EntryKind,
    /// Raw type code as sent by the server
    pub code: char,
    /// Human-readable label
    pub display_text: String,
    /// Where selecting this entry leads. Port is 0 when the line had none.
    pub target: Target,
}

impl Entry {
    /// Synthetic informational row, e.g. for surfacing an error in place of a listing
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Info,
            code: EntryKind::INFO_CODE,
            display_text: text.into(),
            target: Target::new("", 0, ""),
        }
    }

    pub fn is_navigable(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(EntryKind::from_code('i'), EntryKind::Info);
        assert_eq!(EntryKind::from_code('1'), EntryKind::Directory);
        assert_eq!(EntryKind::from_code('0'), EntryKind::File);
    }

    #[test]
    fn test_unknown_codes_are_files() {
        // Error code and codes nobody has defined
        assert_eq!(EntryKind::from_code('3'), EntryKind::File);
        assert_eq!(EntryKind::from_code('~'), EntryKind::File);
        assert_eq!(EntryKind::from_code('I'), EntryKind::File);
    }

    #[test]
    fn test_synthetic_info() {
        let entry = Entry::info("Error connection refused");
        assert_eq!(entry.kind, EntryKind::Info);
        assert_eq!(entry.display_text, "Error connection refused");
        assert!(!entry.is_navigable());
    }
}
