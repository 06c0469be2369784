//! Application config file: shell identity plus an optional directory tree.
//!
//! ```toml
//! [shell]
//! host_name = "LAB-01"
//!
//! [tree]
//! root = 'C:\Users\guest'
//!
//! [[tree.directory]]
//! path = 'C:\Users\guest'
//! entries = [{ name = "todo.txt", kind = "file", size = 120 }]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use nexa_types::config::ShellConfig;
use nexa_vfs::TreeSeed;

/// Environment variable consulted when no config path is given.
pub const CONFIG_ENV: &str = "NEXA_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub shell: ShellConfig,
    /// Replaces the stock directory tree when present.
    pub tree: Option<TreeSeed>,
}

impl AppConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Load from `path`, or fall back to the built-in defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => {
                let config = Self::from_file(Path::new(p))?;
                log::info!("Loaded config from {p}");
                Ok(config)
            },
            None => {
                log::warn!("No config file given (arg or {CONFIG_ENV}) -- using defaults");
                Ok(Self::default())
            },
        }
    }

    /// The tree to serve: the configured one or the stock layout.
    pub fn tree_seed(&self) -> TreeSeed {
        self.tree.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_path_gives_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.tree_seed(), TreeSeed::default());
    }

    #[test]
    fn shell_table_overrides_identity() {
        let cfg = AppConfig::from_toml("[shell]\nuser_name = \"ops\"\n").unwrap();
        assert_eq!(cfg.shell.user_name, "ops");
        assert_eq!(cfg.shell.host_name, "NEXA-SYSTEM");
        assert!(cfg.tree.is_none());
    }

    #[test]
    fn load_from_file_with_tree() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[shell]
volume_label = "LAB"

[tree]
root = 'C:\Users\guest'

[[tree.directory]]
path = 'C:\Users\guest'
entries = [{{ name = "todo.txt", kind = "file", size = 120 }}]
"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.shell.volume_label, "LAB");
        let seed = cfg.tree_seed();
        assert_eq!(seed.root, r"C:\Users\guest");
        assert_eq!(seed.directories[0].entries[0].name, "todo.txt");
    }

    #[test]
    fn unreadable_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = AppConfig::load(missing.to_str()).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[shell").unwrap();
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }
}
