//! Error types for the NEXA shell.

/// Errors produced by the NEXA shell.
#[derive(Debug, thiserror::Error)]
pub enum NexaError {
    /// Navigation target does not exist in the directory tree.
    #[error("path not found: {0}")]
    PathNotFound(String),

    /// Command name matched nothing in the command table.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("VFS error: {0}")]
    Vfs(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NexaError>;
