//! Command interpreter and shell session.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. A `ShellSession` feeds lines
//! through the registry and keeps the transcript and history.

mod commands;
mod history;
mod interpreter;
mod session;
mod system_commands;

/// Register all built-in commands (dir, cd, cls, system info, tree).
pub use commands::register_builtins;
/// Submitted-line history with recall cursor.
pub use history::History;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (lines or a clear signal).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Shared mutable environment passed to every command.
pub use interpreter::Environment;
pub use session::{ShellSession, SubmitResult, render_error};
/// Register the system information commands into a registry.
pub use system_commands::register_system_commands;
