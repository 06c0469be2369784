//! One interactive shell: prompt, transcript, history and input buffer.

use std::sync::Arc;

use nexa_platform::Platform;
use nexa_types::config::ShellConfig;
use nexa_types::error::NexaError;
use nexa_types::input::InputEvent;
use nexa_types::line::TerminalLine;
use nexa_vfs::{DirectoryTree, VirtualFileSystem};

use crate::history::History;
use crate::interpreter::{CommandOutput, CommandRegistry, Environment};

/// What a submission did to the transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult {
    /// These lines were appended, in order.
    Appended(Vec<TerminalLine>),
    /// The transcript was emptied.
    Cleared,
}

/// A single shell session over a shared directory tree.
///
/// The session owns everything mutable (cursor, history, transcript, input
/// buffer); the tree itself is shared read-only.
pub struct ShellSession {
    registry: CommandRegistry,
    fs: VirtualFileSystem,
    platform: Box<dyn Platform>,
    config: ShellConfig,
    history: History,
    transcript: Vec<TerminalLine>,
    input: String,
}

impl ShellSession {
    /// Start a session at the tree's root with the built-in commands.
    pub fn new(tree: Arc<DirectoryTree>, platform: Box<dyn Platform>, config: ShellConfig) -> Self {
        let mut registry = CommandRegistry::new();
        crate::register_builtins(&mut registry);
        Self::with_registry(registry, VirtualFileSystem::new(tree), platform, config)
    }

    /// Start a session with a caller-built registry and cursor.
    pub fn with_registry(
        registry: CommandRegistry,
        fs: VirtualFileSystem,
        platform: Box<dyn Platform>,
        config: ShellConfig,
    ) -> Self {
        let transcript = vec![
            TerminalLine::header(config.banner.clone()),
            TerminalLine::output(config.copyright.clone()),
            TerminalLine::blank(),
        ];
        log::info!(
            "Shell session started at {} ({} commands)",
            fs.current_path(),
            registry.len()
        );
        Self {
            registry,
            fs,
            platform,
            config,
            history: History::new(),
            transcript,
            input: String::new(),
        }
    }

    // -- Accessors --

    pub fn transcript(&self) -> &[TerminalLine] {
        &self.transcript
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current_path(&self) -> &str {
        self.fs.current_path()
    }

    /// The prompt shown before the input buffer, e.g. `C:\Users\x>`.
    pub fn prompt(&self) -> String {
        format!("{}>", self.fs.current_path())
    }

    /// The uncommitted input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    // -- Submission --

    /// Submit whatever is in the input buffer.
    pub fn submit(&mut self) -> SubmitResult {
        let raw = std::mem::take(&mut self.input);
        self.submit_line(&raw)
    }

    /// Run one raw input line and record it.
    ///
    /// A blank line appends a single blank line and is not recorded.
    /// Anything else is echoed after the prompt, pushed to history, and
    /// followed by the command's output; echo and output land together.
    pub fn submit_line(&mut self, raw: &str) -> SubmitResult {
        self.input.clear();
        if raw.trim().is_empty() {
            self.history.reset_cursor();
            let appended = vec![TerminalLine::blank()];
            self.transcript.extend(appended.iter().cloned());
            return SubmitResult::Appended(appended);
        }

        let echo = TerminalLine::command(format!("{}{raw}", self.prompt()));
        self.history.push(raw);

        let mut env = Environment {
            fs: &mut self.fs,
            platform: self.platform.as_ref(),
            config: &self.config,
        };
        let output = match self.registry.execute(raw, &mut env) {
            Ok(CommandOutput::Clear) => {
                self.transcript.clear();
                return SubmitResult::Cleared;
            },
            Ok(CommandOutput::Lines(lines)) => lines,
            Ok(CommandOutput::None) => Vec::new(),
            Err(e) => {
                log::debug!("command failed: {e}");
                render_error(&e)
            },
        };

        let mut appended = Vec::with_capacity(output.len() + 1);
        appended.push(echo);
        appended.extend(output);
        self.transcript.extend(appended.iter().cloned());
        SubmitResult::Appended(appended)
    }

    // -- Input buffer --

    /// Replace the buffer with the previous history entry.
    pub fn recall_previous(&mut self) {
        if let Some(line) = self.history.recall_previous() {
            self.input = line.to_string();
        }
    }

    /// Replace the buffer with the next history entry, or clear it when
    /// stepping past the newest one.
    pub fn recall_next(&mut self) {
        if let Some(line) = self.history.recall_next() {
            self.input = line.to_string();
        }
    }

    /// Apply one front-end input event. Returns the submission result when
    /// the event was `Submit`.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<SubmitResult> {
        if event.is_recall() {
            log::trace!("{event:?} at cursor {:?}", self.history.cursor());
        }
        match event {
            InputEvent::TextInput(ch) => self.input.push(ch),
            InputEvent::Backspace => {
                self.input.pop();
            },
            InputEvent::Submit => return Some(self.submit()),
            InputEvent::RecallPrevious => self.recall_previous(),
            InputEvent::RecallNext => self.recall_next(),
        }
        None
    }
}

/// Turn a command error into transcript lines.
pub fn render_error(err: &NexaError) -> Vec<TerminalLine> {
    match err {
        NexaError::PathNotFound(_) => vec![
            TerminalLine::error("The system cannot find the path specified."),
            TerminalLine::blank(),
        ],
        NexaError::UnknownCommand(name) => vec![
            TerminalLine::error(format!(
                "'{name}' is not recognized as an internal or external command,"
            )),
            TerminalLine::error("operable program or batch file."),
            TerminalLine::blank(),
        ],
        other => vec![TerminalLine::error(format!("error: {other}")), TerminalLine::blank()],
    }
}
