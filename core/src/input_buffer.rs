//! Input buffer pairing each typed character with its chosen variant.
//!
//! Keeping the character and its selection in one entry means the buffer and
//! the selection memory can never drift apart in length. The cursor is a
//! character index, `0 ..= len`.

use std::sync::Arc;

/// A typed character and the variant currently representing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctChar {
    /// Raw ASCII key as typed
    pub ch: char,
    /// Chosen variant, `None` when the character has no variants
    pub variant: Option<Arc<str>>,
}

impl PunctChar {
    pub fn new(ch: char, variant: Option<Arc<str>>) -> Self {
        Self { ch, variant }
    }

    /// What this entry turns into on commit.
    pub fn display(&self) -> DisplayStr<'_> {
        match &self.variant {
            Some(variant) => DisplayStr::Variant(&variant[..]),
            None => DisplayStr::Raw(self.ch),
        }
    }
}

/// Borrowed view of an entry's output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStr<'a> {
    Variant(&'a str),
    Raw(char),
}

impl DisplayStr<'_> {
    fn push_to(self, out: &mut String) {
        match self {
            DisplayStr::Variant(s) => out.push_str(s),
            DisplayStr::Raw(ch) => out.push(ch),
        }
    }

    fn char_len(self) -> usize {
        match self {
            DisplayStr::Variant(s) => s.chars().count(),
            DisplayStr::Raw(_) => 1,
        }
    }
}

/// Input buffer tracking typed characters, their selections and the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    entries: Vec<PunctChar>,
    cursor: usize,
}

impl InputBuffer {
    /// Create a new empty input buffer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PunctChar] {
        &self.entries
    }

    /// Cursor position (character index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of typed characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear the buffer and reset cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// Insert an entry at the cursor and move past it.
    pub fn insert(&mut self, entry: PunctChar) {
        self.entries.insert(self.cursor, entry);
        self.cursor += 1;
    }

    /// Remove the entry before the cursor (backspace).
    pub fn remove_before(&mut self) -> Option<PunctChar> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries.remove(self.cursor))
    }

    /// Remove the entry after the cursor (delete key).
    pub fn remove_after(&mut self) -> Option<PunctChar> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        Some(self.entries.remove(self.cursor))
    }

    /// Returns true if cursor moved.
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Returns true if cursor moved.
    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.entries.len();
    }

    /// The entry immediately before the cursor, if any.
    pub fn before_cursor(&self) -> Option<&PunctChar> {
        self.cursor.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn before_cursor_mut(&mut self) -> Option<&mut PunctChar> {
        self.cursor.checked_sub(1).and_then(|i| self.entries.get_mut(i))
    }

    /// The raw typed characters.
    pub fn raw_text(&self) -> String {
        self.entries.iter().map(|e| e.ch).collect()
    }

    /// Every entry's chosen output, concatenated in order.
    pub fn resolved_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            entry.display().push_to(&mut out);
        }
        out
    }

    /// Cursor expressed as a character offset into `resolved_text()`.
    pub fn resolved_cursor(&self) -> usize {
        self.entries[..self.cursor]
            .iter()
            .map(|e| e.display().char_len())
            .sum()
    }

    /// Raw text with `|` marking the cursor.
    pub fn raw_text_with_cursor(&self) -> String {
        let mut out = String::with_capacity(self.entries.len() + 1);
        for (i, entry) in self.entries.iter().enumerate() {
            if i == self.cursor {
                out.push('|');
            }
            out.push(entry.ch);
        }
        if self.cursor == self.entries.len() {
            out.push('|');
        }
        out
    }
}
