//! Submitted-line history with an up/down recall cursor.

/// Append-only list of submitted lines plus the recall position.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    /// `None` while the user is editing a fresh line.
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and leave recall mode.
    pub fn push(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.cursor = None;
    }

    /// Leave recall mode without recording anything.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step back. Starts at the newest entry and sticks at the oldest.
    /// Returns `None` only when there is no history.
    pub fn recall_previous(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let idx = match self.cursor {
            None => last,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(idx);
        Some(&self.entries[idx])
    }

    /// Step forward. Stepping past the newest entry leaves recall mode and
    /// yields an empty buffer. Does nothing (returns `None`) outside recall.
    pub fn recall_next(&mut self) -> Option<&str> {
        let current = self.cursor?;
        let idx = current + 1;
        if idx >= self.entries.len() {
            self.cursor = None;
            return Some("");
        }
        self.cursor = Some(idx);
        Some(&self.entries[idx])
    }
}
