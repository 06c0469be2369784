//! The current-directory cursor over a shared [`DirectoryTree`].

use std::sync::Arc;

use nexa_types::error::{NexaError, Result};

use crate::tree::parent;
use crate::{DirectoryEntry, DirectoryTree, ROOT_MARKER, SEPARATOR};

/// A session's view of the directory tree.
///
/// `current_path` is always the canonical spelling of a key in the tree.
/// Navigation that does not land on a key leaves it untouched.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    tree: Arc<DirectoryTree>,
    current: String,
}

impl VirtualFileSystem {
    /// Start at the tree's root.
    pub fn new(tree: Arc<DirectoryTree>) -> Self {
        let current = tree.root().to_string();
        Self { tree, current }
    }

    /// Start at `path`, which must be a directory in the tree.
    pub fn at(tree: Arc<DirectoryTree>, path: &str) -> Result<Self> {
        let current = tree
            .canonical(path)
            .ok_or_else(|| NexaError::PathNotFound(path.to_string()))?
            .to_string();
        Ok(Self { tree, current })
    }

    pub fn tree(&self) -> &Arc<DirectoryTree> {
        &self.tree
    }

    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// Entries of the current directory in display order.
    pub fn list_current_directory(&self) -> &[DirectoryEntry] {
        self.tree.entries(&self.current)
    }

    /// Work out where `expr` would lead from the current directory without
    /// moving there.
    ///
    /// `..` climbs one segment, anything containing `:\` is absolute, and
    /// everything else is appended to the current path as-is.
    pub fn resolve(&self, expr: &str) -> Option<String> {
        if expr.is_empty() {
            return None;
        }
        let target = if expr == ".." {
            parent(&self.current)?.to_string()
        } else if expr.contains(ROOT_MARKER) {
            expr.to_string()
        } else {
            format!("{}{SEPARATOR}{expr}", self.current)
        };
        self.tree.canonical(&target).map(str::to_string)
    }

    /// Move to `expr` if it names a directory. Returns whether the move
    /// happened.
    pub fn resolve_and_change_directory(&mut self, expr: &str) -> bool {
        match self.resolve(expr) {
            Some(path) => {
                log::debug!("cd {} -> {}", self.current, path);
                self.current = path;
                true
            }
            None => false,
        }
    }
}
