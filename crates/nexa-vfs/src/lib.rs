//! In-memory virtual file system for the NEXA shell.
//!
//! The directory tree is a flat map from absolute path to the ordered entry
//! list of that directory. There are no parent pointers: a directory's parent
//! is found by dropping the last path segment. [`VirtualFileSystem`] pairs a
//! shared tree with the session's current-directory cursor.

mod filesystem;
mod seed;
mod size;
mod tree;

pub use filesystem::VirtualFileSystem;
pub use seed::{DirectorySeed, EntrySeed, SeedKind, TreeSeed};
pub use size::format_byte_size;
pub use tree::DirectoryTree;

use nexa_types::time::Timestamp;

/// Path segment separator of the modeled platform.
pub const SEPARATOR: char = '\\';

/// Marker that makes a path expression absolute (`C:\...`).
pub const ROOT_MARKER: &str = ":\\";

/// Whether an entry is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A file with its size in bytes.
    File { size: u64 },
    Directory,
}

/// A single item in a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub kind: EntryKind,
    /// Set when the entry is created; never updated.
    pub modified: Timestamp,
}

impl DirectoryEntry {
    pub fn file(name: impl Into<String>, size: u64, modified: Timestamp) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File { size },
            modified,
        }
    }

    pub fn directory(name: impl Into<String>, modified: Timestamp) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            modified,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Size in bytes, or `None` for directories.
    pub fn size(&self) -> Option<u64> {
        match self.kind {
            EntryKind::File { size } => Some(size),
            EntryKind::Directory => None,
        }
    }
}
