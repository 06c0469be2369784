//! Built-in directory commands for the NEXA terminal.

use nexa_types::error::{NexaError, Result};
use nexa_types::line::TerminalLine;
use nexa_types::time::Timestamp;
use nexa_vfs::format_byte_size;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register all built-in commands into a registry, in `help` listing order.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(DirCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(ClsCmd));
    crate::register_system_commands(reg);
    reg.register(Box::new(TreeCmd));
}

/// `M/D/YYYY h:MM:SS AM`, the stamp at the start of every `dir` row.
fn stamp(ts: &Timestamp) -> String {
    format!("{} {}", ts.short_date(), ts.short_time())
}

// ---------------------------------------------------------------------------
// dir
// ---------------------------------------------------------------------------

struct DirCmd;
impl Command for DirCmd {
    fn name(&self) -> &str {
        "dir"
    }
    fn description(&self) -> &str {
        "Displays a list of files and subdirectories"
    }
    fn usage(&self) -> &str {
        "dir"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let now = stamp(&env.platform.now()?);
        let mut lines = vec![
            TerminalLine::output(format!(" Directory of {}", env.fs.current_path())),
            TerminalLine::blank(),
            TerminalLine::output(format!("{now}    <DIR>          .")),
            TerminalLine::output(format!("{now}    <DIR>          ..")),
        ];

        let mut files = 0usize;
        let mut dirs = 0usize;
        let mut total = 0u64;
        for entry in env.fs.list_current_directory() {
            let when = stamp(&entry.modified);
            match entry.size() {
                None => {
                    dirs += 1;
                    lines.push(TerminalLine::output(format!(
                        "{when}    <DIR>          {}",
                        entry.name
                    )));
                },
                Some(size) => {
                    files += 1;
                    total = total.saturating_add(size);
                    lines.push(TerminalLine::output(format!(
                        "{when} {size:>19} {}",
                        entry.name
                    )));
                },
            }
        }

        lines.push(TerminalLine::output(format!(
            "               {files} File(s) {}",
            format_byte_size(total)
        )));
        lines.push(TerminalLine::output(format!("               {dirs} Dir(s)")));
        lines.push(TerminalLine::blank());
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Displays the name of or changes the current directory"
    }
    fn usage(&self) -> &str {
        "cd [path]"
    }
    fn execute(&self, args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            return Ok(CommandOutput::Lines(vec![
                TerminalLine::output(env.fs.current_path()),
                TerminalLine::blank(),
            ]));
        }
        if env.fs.resolve_and_change_directory(args) {
            Ok(CommandOutput::None)
        } else {
            Err(NexaError::PathNotFound(args.to_string()))
        }
    }
}

// ---------------------------------------------------------------------------
// cls
// ---------------------------------------------------------------------------

struct ClsCmd;
impl Command for ClsCmd {
    fn name(&self) -> &str {
        "cls"
    }
    fn description(&self) -> &str {
        "Clears the screen"
    }
    fn usage(&self) -> &str {
        "cls"
    }
    fn execute(&self, _args: &str, _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// tree
// ---------------------------------------------------------------------------

struct TreeCmd;
impl Command for TreeCmd {
    fn name(&self) -> &str {
        "tree"
    }
    fn description(&self) -> &str {
        "Graphically displays the directory structure"
    }
    fn usage(&self) -> &str {
        "tree"
    }
    fn execute(&self, _args: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let label = &env.config.volume_label;
        let serial = env.platform.unix_millis()?;
        let mut lines = vec![
            TerminalLine::output(format!("Folder PATH listing for volume {label}")),
            TerminalLine::output(format!("Volume serial number is {label}-{serial:X}")),
            TerminalLine::output(env.fs.current_path()),
            TerminalLine::output("│"),
        ];
        let entries = env.fs.list_current_directory();
        for (idx, entry) in entries.iter().enumerate() {
            let prefix = if idx + 1 == entries.len() {
                "└───"
            } else {
                "├───"
            };
            lines.push(TerminalLine::output(format!("{prefix} {}", entry.name)));
        }
        lines.push(TerminalLine::blank());
        Ok(CommandOutput::Lines(lines))
    }
}
