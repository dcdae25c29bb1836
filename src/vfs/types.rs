//! Virtual Filesystem Types
//!
//! Core types for the in-memory filesystem and its CSV image format.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Virtual filesystem errors.
///
/// Only two classes exist: a path (on the host or inside the image) that is
/// not there, and an I/O or decoding failure while moving bytes in or out.
#[derive(Error, Debug)]
pub enum VfsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },

    #[error("EIO: {message}, {operation} '{path}'")]
    Io {
        path: String,
        operation: String,
        message: String,
    },
}

/// Entry kind as written in the `type` column of an image row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

/// A single node of the virtual filesystem.
///
/// File content is kept in its transport encoding (base64 text) exactly as
/// loaded from the image; it is decoded to bytes on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VfsEntry {
    File { content: String },
    Directory,
}

impl VfsEntry {
    /// Check if entry is a file
    pub fn is_file(&self) -> bool {
        matches!(self, VfsEntry::File { .. })
    }

    /// Check if entry is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, VfsEntry::Directory)
    }

    /// Kind of the entry, as stored in an image row.
    pub fn kind(&self) -> EntryKind {
        match self {
            VfsEntry::File { .. } => EntryKind::File,
            VfsEntry::Directory => EntryKind::Dir,
        }
    }
}

/// One row of the CSV image: `path,type,content`.
///
/// Directories carry an empty `content` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_predicates() {
        let file = VfsEntry::File {
            content: "aGk=".to_string(),
        };
        assert!(file.is_file());
        assert!(!file.is_directory());
        assert_eq!(file.kind(), EntryKind::File);

        let dir = VfsEntry::Directory;
        assert!(!dir.is_file());
        assert!(dir.is_directory());
        assert_eq!(dir.kind(), EntryKind::Dir);
    }

    #[test]
    fn test_error_display() {
        let err = VfsError::NotFound {
            path: "/missing".to_string(),
            operation: "load".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "ENOENT: no such file or directory, load '/missing'"
        );

        let err = VfsError::Io {
            path: "/data/blob".to_string(),
            operation: "read".to_string(),
            message: "invalid base64 content".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "EIO: invalid base64 content, read '/data/blob'"
        );
    }
}
