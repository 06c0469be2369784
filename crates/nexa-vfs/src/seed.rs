//! Declarative description of a directory tree, loadable from TOML.
//!
//! ```toml
//! root = 'C:\Users\guest'
//!
//! [[directory]]
//! path = 'C:\Users\guest'
//! entries = [
//!     { name = "Docs", kind = "directory" },
//!     { name = "todo.txt", kind = "file", size = 120 },
//! ]
//!
//! [[directory]]
//! path = 'C:\Users\guest\Docs'
//! ```

use serde::{Deserialize, Serialize};

use nexa_types::error::{NexaError, Result};
use nexa_types::time::Timestamp;

use crate::{DirectoryEntry, DirectoryTree};

/// Entry kind as written in a seed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedKind {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntrySeed {
    pub name: String,
    pub kind: SeedKind,
    /// Only meaningful for files; missing means zero bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorySeed {
    pub path: String,
    #[serde(default)]
    pub entries: Vec<EntrySeed>,
}

/// A whole tree: the root path plus its directories, parents first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSeed {
    pub root: String,
    #[serde(rename = "directory", default)]
    pub directories: Vec<DirectorySeed>,
}

impl EntrySeed {
    pub fn file(name: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            kind: SeedKind::File,
            size: Some(size),
        }
    }

    pub fn directory(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: SeedKind::Directory,
            size: None,
        }
    }

    fn to_entry(&self, modified: Timestamp) -> Result<DirectoryEntry> {
        match (self.kind, self.size) {
            (SeedKind::File, size) => Ok(DirectoryEntry::file(
                self.name.clone(),
                size.unwrap_or(0),
                modified,
            )),
            (SeedKind::Directory, None) => {
                Ok(DirectoryEntry::directory(self.name.clone(), modified))
            },
            (SeedKind::Directory, Some(_)) => Err(NexaError::Config(format!(
                "directory entry {} cannot have a size",
                self.name
            ))),
        }
    }
}

impl DirectorySeed {
    fn new(path: &str, entries: Vec<EntrySeed>) -> Self {
        Self {
            path: path.to_string(),
            entries,
        }
    }
}

impl Default for TreeSeed {
    fn default() -> Self {
        let root = r"C:\Users\Alikay_h";
        Self {
            root: root.to_string(),
            directories: vec![
                DirectorySeed::new(
                    root,
                    vec![
                        EntrySeed::directory("Desktop"),
                        EntrySeed::directory("Documents"),
                        EntrySeed::directory("Downloads"),
                        EntrySeed::directory("Pictures"),
                        EntrySeed::directory("Videos"),
                        EntrySeed::file("config.json", 2048),
                    ],
                ),
                DirectorySeed::new(
                    r"C:\Users\Alikay_h\Desktop",
                    vec![
                        EntrySeed::file("project.txt", 1024),
                        EntrySeed::file("notes.txt", 512),
                    ],
                ),
                DirectorySeed::new(
                    r"C:\Users\Alikay_h\Documents",
                    vec![
                        EntrySeed::file("report.docx", 15360),
                        EntrySeed::file("data.xlsx", 8192),
                    ],
                ),
                DirectorySeed::new(
                    r"C:\Users\Alikay_h\Downloads",
                    vec![
                        EntrySeed::file("installer.exe", 52_428_800),
                        EntrySeed::file("image.png", 204_800),
                    ],
                ),
            ],
        }
    }
}

impl TreeSeed {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Validate the seed and build the tree, stamping every entry with `now`.
    pub fn build(&self, now: Timestamp) -> Result<DirectoryTree> {
        let mut tree = DirectoryTree::new(&self.root);
        for dir in &self.directories {
            if !tree.contains(&dir.path) {
                tree.add_directory(&dir.path)?;
            }
            for entry in &dir.entries {
                tree.add_entry(&dir.path, entry.to_entry(now)?)?;
            }
        }
        log::debug!(
            "Built directory tree at {} with {} directories",
            tree.root(),
            tree.len()
        );
        Ok(tree)
    }
}
