use serde::{Deserialize, Serialize};

/// Per-tab linear browsing history: an ordered list of visited URLs plus the
/// current position.
///
/// The entry list is never empty and the index always points at a valid
/// entry. `back`/`forward` only move the index; `push` discards every entry
/// after the current position before appending, so forward history never
/// survives a new navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStack {
    entries: Vec<String>,
    index: usize,
}

impl HistoryStack {
    /// Creates a history stack seeded with a single entry.
    pub fn new(initial_url: &str) -> Self {
        Self {
            entries: vec![initial_url.to_string()],
            index: 0,
        }
    }

    /// Records a new navigation: truncates forward entries, appends `url`,
    /// and moves the index to the appended entry.
    pub fn push(&mut self, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
    }

    /// Moves one entry back. Returns the new current URL, or `None` when
    /// already at the oldest entry (the stack is left untouched).
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Moves one entry forward. Returns the new current URL, or `None` when
    /// already at the newest entry.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    /// The URL at the current position.
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the stack is seeded with one entry and never shrinks
    /// below it.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded entries in visit order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
