//! Command trait, registry, and dispatch logic.
//!
//! A line is lower-cased and split on whitespace. The first token names the
//! command; the rest, re-joined with single spaces, is handed to it verbatim.

use std::collections::HashMap;

use nexa_platform::Platform;
use nexa_types::config::ShellConfig;
use nexa_types::error::{NexaError, Result};
use nexa_types::line::TerminalLine;
use nexa_vfs::VirtualFileSystem;

const HELP_DESCRIPTION: &str = "Provides Help information for NEXA commands";
const HELP_USAGE: &str = "help [command]";

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Lines to append after the echo.
    Lines(Vec<TerminalLine>),
    /// Command produced no visible output.
    None,
    /// Signal to clear the transcript.
    Clear,
}

/// Shared mutable environment passed to every command.
pub struct Environment<'a> {
    /// Current-directory cursor. Only `cd` moves it.
    pub fs: &'a mut VirtualFileSystem,
    /// Host info and clock.
    pub platform: &'a dyn Platform,
    /// Identity strings for the informational commands.
    pub config: &'a ShellConfig,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types, lower case).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "cd \[path\]").
    fn usage(&self) -> &str;

    /// Execute the command with the joined argument string.
    fn execute(&self, args: &str, env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
    /// Names in registration order, for `help`.
    order: Vec<String>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name
    /// but keeps its original position in the listing.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_string();
        if self.commands.insert(name.clone(), cmd).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered command names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Parse and execute a command line.
    ///
    /// A blank line yields [`CommandOutput::None`]. `help` is handled here
    /// since it needs the registry itself.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let lowered = line.to_lowercase();
        let mut tokens = lowered.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(CommandOutput::None);
        };
        let args = tokens.collect::<Vec<_>>().join(" ");
        log::debug!("dispatch {name:?} args={args:?} cwd={}", env.fs.current_path());

        if name == "help" {
            return self.execute_help(&args);
        }

        match self.commands.get(name) {
            Some(cmd) => cmd.execute(&args, env),
            None => Err(NexaError::UnknownCommand(name.to_string())),
        }
    }

    fn execute_help(&self, args: &str) -> Result<CommandOutput> {
        if let Some(name) = args.split_whitespace().next() {
            let (description, usage) = match self.commands.get(name) {
                Some(cmd) => (cmd.description(), cmd.usage()),
                None if name == "help" => (HELP_DESCRIPTION, HELP_USAGE),
                None => return Err(NexaError::UnknownCommand(name.to_string())),
            };
            return Ok(CommandOutput::Lines(vec![
                TerminalLine::output(description),
                TerminalLine::blank(),
                TerminalLine::output(usage.to_uppercase()),
                TerminalLine::blank(),
            ]));
        }

        let mut lines = vec![
            TerminalLine::output(
                "For more information on a specific command, type HELP command-name",
            ),
            TerminalLine::blank(),
        ];
        for cmd in self.order.iter().filter_map(|n| self.commands.get(n)) {
            lines.push(TerminalLine::success(format!(
                "{:<9} - {}",
                cmd.name().to_uppercase(),
                cmd.description()
            )));
        }
        lines.push(TerminalLine::blank());
        Ok(CommandOutput::Lines(lines))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockPlatform, stock_fs};
    use nexa_types::line::LineKind;

    struct EchoCmd;
    impl Command for EchoCmd {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Prints its arguments"
        }
        fn usage(&self) -> &str {
            "echo [text]"
        }
        fn execute(&self, args: &str, _env: &mut Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Lines(vec![TerminalLine::output(args)]))
        }
    }

    fn run(reg: &CommandRegistry, line: &str) -> Result<CommandOutput> {
        let mut fs = stock_fs();
        let platform = MockPlatform::default();
        let config = ShellConfig::default();
        let mut env = Environment {
            fs: &mut fs,
            platform: &platform,
            config: &config,
        };
        reg.execute(line, &mut env)
    }

    fn texts(out: CommandOutput) -> Vec<String> {
        match out {
            CommandOutput::Lines(lines) => lines.into_iter().map(|l| l.text).collect(),
            other => panic!("expected lines, got {other:?}"),
        }
    }

    fn echo_registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        reg
    }

    #[test]
    fn register_and_execute() {
        let out = run(&echo_registry(), "echo hello world").unwrap();
        assert_eq!(texts(out), vec!["hello world"]);
    }

    #[test]
    fn args_are_lowercased_and_single_spaced() {
        let out = run(&echo_registry(), "  ECHO   Hello\t\tWorld  ").unwrap();
        assert_eq!(texts(out), vec!["hello world"]);
    }

    #[test]
    fn blank_line_is_none() {
        assert_eq!(run(&echo_registry(), "   ").unwrap(), CommandOutput::None);
    }

    #[test]
    fn unknown_command_names_token() {
        let err = run(&echo_registry(), "FooBar baz").unwrap_err();
        match err {
            NexaError::UnknownCommand(name) => assert_eq!(name, "foobar"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn register_replaces_without_reordering() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        reg.register(Box::new(EchoCmd));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.names().collect::<Vec<_>>(), vec!["echo"]);
    }

    #[test]
    fn help_lists_in_registration_order() {
        let mut reg = CommandRegistry::new();
        crate::register_builtins(&mut reg);
        let out = run(&reg, "help").unwrap();
        let CommandOutput::Lines(lines) = out else {
            panic!("expected lines");
        };
        assert_eq!(
            lines[0].text,
            "For more information on a specific command, type HELP command-name"
        );
        assert!(lines[1].is_blank());
        assert_eq!(
            lines[2].text,
            "DIR       - Displays a list of files and subdirectories"
        );
        assert_eq!(lines[2].kind, LineKind::Success);
        assert!(
            lines
                .iter()
                .any(|l| l.text == "SYSTEMINFO - Displays detailed system configuration")
        );
        assert_eq!(lines.len(), 2 + reg.len() + 1);
        assert!(lines.last().unwrap().is_blank());
    }

    #[test]
    fn help_for_one_command() {
        let out = run(&echo_registry(), "help ECHO").unwrap();
        assert_eq!(
            texts(out),
            vec!["Prints its arguments", "", "ECHO [TEXT]", ""]
        );
    }

    #[test]
    fn help_describes_itself() {
        let out = run(&echo_registry(), "help help").unwrap();
        assert_eq!(
            texts(out),
            vec![HELP_DESCRIPTION, "", "HELP [COMMAND]", ""]
        );
    }

    #[test]
    fn help_for_unknown_command() {
        let err = run(&echo_registry(), "help nope").unwrap_err();
        assert!(matches!(err, NexaError::UnknownCommand(ref n) if n == "nope"));
    }
}
