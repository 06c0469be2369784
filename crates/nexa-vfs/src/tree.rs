//! Flat, path-keyed directory tree.
//!
//! Keys are absolute paths. Lookups ignore case and always hand back
//! the spelling the directory was inserted with.

use std::borrow::Cow;
use std::collections::HashMap;

use nexa_types::error::{NexaError, Result};

use crate::{DirectoryEntry, SEPARATOR};

#[derive(Debug, Clone)]
struct Directory {
    /// Canonical spelling of the path.
    path: String,
    entries: Vec<DirectoryEntry>,
}

/// Mapping from absolute path to the ordered entries of that directory.
///
/// Built once, then shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct DirectoryTree {
    root: String,
    /// Folded path -> directory.
    dirs: HashMap<String, Directory>,
    /// Folded paths in insertion order.
    order: Vec<String>,
}

/// Check whether a path is already in normal form (no doubled separators,
/// no trailing separator unless it is a drive root like `C:\`).
fn is_normalized(path: &str) -> bool {
    let doubled = format!("{SEPARATOR}{SEPARATOR}");
    if path.contains(&doubled) {
        return false;
    }
    !(path.ends_with(SEPARATOR) && !is_drive_root(path))
}

fn is_drive_root(path: &str) -> bool {
    path.strip_suffix(SEPARATOR)
        .is_some_and(|p| p.ends_with(':') && !p.contains(SEPARATOR))
}

/// Collapse doubled separators and strip a trailing one (except on a drive
/// root). Returns the input unchanged when already in normal form.
pub(crate) fn normalize(path: &str) -> Cow<'_, str> {
    if is_normalized(path) {
        return Cow::Borrowed(path);
    }
    let mut result = String::with_capacity(path.len());
    let mut prev_sep = false;
    for ch in path.chars() {
        if ch == SEPARATOR {
            if !prev_sep {
                result.push(ch);
            }
            prev_sep = true;
        } else {
            result.push(ch);
            prev_sep = false;
        }
    }
    while result.ends_with(SEPARATOR) && !is_drive_root(&result) {
        result.pop();
    }
    Cow::Owned(result)
}

/// Case-folded lookup key. Must agree with how the interpreter lowers
/// command lines, or non-ASCII names become unreachable.
fn fold(path: &str) -> String {
    path.to_lowercase()
}

/// Parent of a path: everything before the last separator.
pub(crate) fn parent(path: &str) -> Option<&str> {
    path.rsplit_once(SEPARATOR).map(|(parent, _)| parent)
}

impl DirectoryTree {
    /// Create a tree containing only the (empty) root directory.
    pub fn new(root: &str) -> Self {
        let root = normalize(root).into_owned();
        let key = fold(&root);
        let mut dirs = HashMap::new();
        dirs.insert(
            key.clone(),
            Directory {
                path: root.clone(),
                entries: Vec::new(),
            },
        );
        Self {
            root,
            dirs,
            order: vec![key],
        }
    }

    /// Add an empty directory. Its parent must already be in the tree.
    pub fn add_directory(&mut self, path: &str) -> Result<()> {
        let path = normalize(path);
        let key = fold(&path);
        if self.dirs.contains_key(&key) {
            return Err(NexaError::Vfs(format!("directory already exists: {path}")));
        }
        let par = parent(&path)
            .ok_or_else(|| NexaError::Vfs(format!("path has no parent: {path}")))?;
        if !self.contains(par) {
            return Err(NexaError::Vfs(format!(
                "parent directory does not exist: {par}"
            )));
        }
        self.dirs.insert(
            key.clone(),
            Directory {
                path: path.into_owned(),
                entries: Vec::new(),
            },
        );
        self.order.push(key);
        Ok(())
    }

    /// Append an entry to a directory's listing. Names are unique per
    /// directory, ignoring case.
    pub fn add_entry(&mut self, dir: &str, entry: DirectoryEntry) -> Result<()> {
        if entry.name.is_empty()
            || entry.name == "."
            || entry.name == ".."
            || entry.name.contains(SEPARATOR)
        {
            return Err(NexaError::Vfs(format!(
                "invalid entry name: {:?}",
                entry.name
            )));
        }
        let key = fold(&normalize(dir));
        let directory = self
            .dirs
            .get_mut(&key)
            .ok_or_else(|| NexaError::Vfs(format!("no such directory: {dir}")))?;
        let folded = fold(&entry.name);
        if directory.entries.iter().any(|e| fold(&e.name) == folded) {
            return Err(NexaError::Vfs(format!(
                "duplicate entry {} in {}",
                entry.name, directory.path
            )));
        }
        directory.entries.push(entry);
        Ok(())
    }

    /// The root path.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Canonical spelling of `path`, if it is a directory in the tree.
    pub fn canonical(&self, path: &str) -> Option<&str> {
        self.dirs
            .get(&fold(&normalize(path)))
            .map(|d| d.path.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.canonical(path).is_some()
    }

    /// Entries of `path` in insertion order; empty when the path is unmapped.
    pub fn entries(&self, path: &str) -> &[DirectoryEntry] {
        self.dirs
            .get(&fold(&normalize(path)))
            .map(|d| d.entries.as_slice())
            .unwrap_or(&[])
    }

    /// All directory paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.dirs.get(key))
            .map(|d| d.path.as_str())
    }

    /// Number of directories, root included.
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexa_types::time::Timestamp;

    const ROOT: &str = r"C:\Users\guest";

    fn t0() -> Timestamp {
        Timestamp::from_unix_secs(0)
    }

    fn sample() -> DirectoryTree {
        let mut tree = DirectoryTree::new(ROOT);
        tree.add_entry(ROOT, DirectoryEntry::directory("Docs", t0()))
            .unwrap();
        tree.add_entry(ROOT, DirectoryEntry::file("a.txt", 10, t0()))
            .unwrap();
        tree.add_directory(r"C:\Users\guest\Docs").unwrap();
        tree
    }

    #[test]
    fn new_tree_has_only_root() {
        let tree = DirectoryTree::new(ROOT);
        assert_eq!(tree.root(), ROOT);
        assert_eq!(tree.len(), 1);
        assert!(tree.entries(ROOT).is_empty());
    }

    #[test]
    fn entries_keep_insertion_order() {
        let tree = sample();
        let names: Vec<&str> = tree.entries(ROOT).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Docs", "a.txt"]);
    }

    #[test]
    fn add_directory_requires_parent() {
        let mut tree = DirectoryTree::new(ROOT);
        let err = tree.add_directory(r"C:\Users\guest\a\b").unwrap_err();
        assert!(err.to_string().contains("parent directory does not exist"));
    }

    #[test]
    fn add_directory_twice_fails() {
        let mut tree = sample();
        assert!(tree.add_directory(r"C:\Users\guest\docs").is_err());
    }

    #[test]
    fn duplicate_entry_name_rejected() {
        let mut tree = sample();
        let err = tree
            .add_entry(ROOT, DirectoryEntry::file("A.TXT", 1, t0()))
            .unwrap_err();
        assert!(err.to_string().contains("duplicate entry"));
    }

    #[test]
    fn invalid_entry_names_rejected() {
        let mut tree = sample();
        for name in ["", ".", "..", r"x\y"] {
            assert!(
                tree.add_entry(ROOT, DirectoryEntry::file(name, 1, t0()))
                    .is_err(),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn add_entry_to_missing_directory_fails() {
        let mut tree = sample();
        assert!(
            tree.add_entry(r"C:\nope", DirectoryEntry::file("x", 1, t0()))
                .is_err()
        );
    }

    #[test]
    fn lookup_ignores_case_and_returns_canonical() {
        let tree = sample();
        assert_eq!(
            tree.canonical(r"c:\users\GUEST\docs"),
            Some(r"C:\Users\guest\Docs")
        );
    }

    #[test]
    fn lookup_ignores_non_ascii_case() {
        let mut tree = sample();
        tree.add_entry(ROOT, DirectoryEntry::directory("Écoles", t0()))
            .unwrap();
        tree.add_directory(r"C:\Users\guest\Écoles").unwrap();
        assert_eq!(
            tree.canonical(r"c:\users\guest\écoles"),
            Some(r"C:\Users\guest\Écoles")
        );
        assert!(
            tree.add_entry(ROOT, DirectoryEntry::file("éCOLES", 1, t0()))
                .is_err()
        );
    }

    #[test]
    fn lookup_tolerates_trailing_and_doubled_separators() {
        let tree = sample();
        assert!(tree.contains(r"C:\Users\guest\Docs\"));
        assert!(tree.contains(r"C:\Users\\guest\Docs"));
    }

    #[test]
    fn missing_path_lists_empty() {
        let tree = sample();
        assert!(tree.entries(r"C:\missing").is_empty());
        assert!(!tree.contains(r"C:\missing"));
    }

    #[test]
    fn paths_in_insertion_order() {
        let tree = sample();
        let paths: Vec<&str> = tree.paths().collect();
        assert_eq!(paths, vec![ROOT, r"C:\Users\guest\Docs"]);
    }

    #[test]
    fn every_non_root_key_has_parent_key() {
        let tree = sample();
        for path in tree.paths().filter(|p| *p != tree.root()) {
            let par = parent(path).unwrap();
            assert!(tree.contains(par), "{path} is missing its parent");
        }
    }

    #[test]
    fn normalize_keeps_drive_root() {
        assert_eq!(normalize(r"C:\"), r"C:\");
        assert_eq!(normalize(r"C:\Users\"), r"C:\Users");
        assert_eq!(normalize(r"C:\\Users"), r"C:\Users");
    }

    #[test]
    fn parent_of_single_segment_is_none() {
        assert_eq!(parent("C:"), None);
        assert_eq!(parent(r"C:\Users"), Some("C:"));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalize_is_idempotent(path in r"[A-Za-z:\\]{1,40}") {
                let once = normalize(&path).into_owned();
                let twice = normalize(&once).into_owned();
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn normalize_never_has_doubled_separators(path in r"[a-z:\\]{1,40}") {
                let normed = normalize(&path);
                prop_assert!(!normed.contains(r"\\"));
            }
        }
    }
}
