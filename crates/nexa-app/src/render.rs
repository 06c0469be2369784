//! Writes transcript updates to a text stream.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use nexa_terminal::SubmitResult;
use nexa_types::line::{LineKind, TerminalLine};

/// ANSI clear screen + cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text with a prompt, like a console.
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum JsonEvent<'a> {
    Line(&'a TerminalLine),
    Clear,
}

pub struct Renderer<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn lines(&mut self, lines: &[TerminalLine]) -> Result<()> {
        for line in lines {
            match self.format {
                OutputFormat::Text => writeln!(self.out, "{}", line.text)?,
                OutputFormat::Json => {
                    serde_json::to_writer(&mut self.out, &JsonEvent::Line(line))?;
                    writeln!(self.out)?;
                },
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::Text => write!(self.out, "{CLEAR_SCREEN}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &JsonEvent::Clear)?;
                writeln!(self.out)?;
            },
        }
        Ok(())
    }

    /// Render one submission. The echo line is skipped in text mode since
    /// the terminal already shows what was typed after the prompt.
    pub fn submission(&mut self, result: &SubmitResult) -> Result<()> {
        match result {
            SubmitResult::Cleared => self.clear(),
            SubmitResult::Appended(lines) => match self.format {
                OutputFormat::Json => self.lines(lines),
                OutputFormat::Text => {
                    let skip = lines.first().is_some_and(|l| l.kind == LineKind::Command);
                    self.lines(&lines[usize::from(skip)..])
                },
            },
        }
    }

    /// Show the prompt (text mode only) and flush.
    pub fn prompt(&mut self, prompt: &str) -> Result<()> {
        if self.format == OutputFormat::Text {
            write!(self.out, "{prompt}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
