//! Transcript lines: the only thing the shell hands to a renderer.

use serde::{Deserialize, Serialize};

/// How a transcript line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of a submitted command, prefixed with the prompt.
    Command,
    /// Plain command output.
    Output,
    /// Error message.
    Error,
    /// Emphasized output (help listings).
    Success,
    /// Banner / header text.
    Header,
}

/// A single rendered line of the session transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub text: String,
}

impl TerminalLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(LineKind::Command, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineKind::Success, text)
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self::new(LineKind::Header, text)
    }

    /// An empty output line.
    pub fn blank() -> Self {
        Self::output(String::new())
    }

    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Output && self.text.is_empty()
    }
}
