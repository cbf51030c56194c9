//! Paged candidate list with cursor navigation.
//!
//! The list holds every candidate of the current context and a single cursor
//! into that flattened sequence. Pages are derived from the cursor: the
//! visible page is the one containing it. Paging wraps around the whole
//! sequence, single-step cursor movement stops at either end.

use crate::text::StyledText;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Layout hint for the candidate window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Let the front-end decide
    #[default]
    System,
}

/// A paginated list of candidates with a cursor over all of them.
#[derive(Debug, Clone)]
pub struct CandidateList {
    /// All available candidates, in display rank order
    candidates: Vec<StyledText>,

    /// Number of candidates per page
    page_size: usize,

    /// Layout hint forwarded to the front-end
    orientation: Orientation,

    /// Index into `candidates` (not into the page)
    cursor: usize,
}

impl Default for CandidateList {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateList {
    /// Create a new empty candidate list.
    pub fn new() -> Self {
        Self::with_page_size(5)
    }

    /// Create a candidate list with specified page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            candidates: Vec::new(),
            page_size: page_size.max(1),
            orientation: Orientation::default(),
            cursor: 0,
        }
    }

    /// Set the page size. The cursor keeps pointing at the same candidate.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Append a candidate at the end of the list.
    pub fn append_candidate(&mut self, candidate: StyledText) {
        self.candidates.push(candidate);
    }

    /// Get all candidates.
    pub fn candidates(&self) -> &[StyledText] {
        &self.candidates
    }

    /// Get the candidate at an absolute index.
    pub fn candidate(&self, index: usize) -> Option<&StyledText> {
        self.candidates.get(index)
    }

    /// Get the total number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Absolute cursor position.
    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to an absolute index.
    /// Out-of-range indices are rejected and leave the cursor alone.
    pub fn set_cursor_pos(&mut self, pos: usize) -> bool {
        if pos >= self.candidates.len() {
            return false;
        }
        self.cursor = pos;
        true
    }

    /// Cursor position within the visible page.
    pub fn cursor_in_page(&self) -> usize {
        self.cursor % self.page_size
    }

    /// Index of the visible page (0-based).
    pub fn current_page(&self) -> usize {
        self.cursor / self.page_size
    }

    /// Get the total number of pages.
    pub fn num_pages(&self) -> usize {
        self.candidates.len().div_ceil(self.page_size)
    }

    fn current_page_range(&self) -> Range<usize> {
        let start = self.current_page() * self.page_size;
        let end = (start + self.page_size).min(self.candidates.len());
        start.min(end)..end
    }

    /// Get the candidates on the visible page.
    pub fn current_page_candidates(&self) -> &[StyledText] {
        &self.candidates[self.current_page_range()]
    }

    /// Get the candidate under the cursor.
    pub fn selected_candidate(&self) -> Option<&StyledText> {
        self.candidates.get(self.cursor)
    }

    /// Move cursor to the previous candidate.
    /// Returns true if the cursor moved.
    pub fn cursor_up(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move cursor to the next candidate.
    /// Returns true if the cursor moved.
    pub fn cursor_down(&mut self) -> bool {
        if self.cursor + 1 >= self.candidates.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Jump one page back, wrapping from the first page to the last.
    /// Returns true if the cursor moved.
    pub fn page_up(&mut self) -> bool {
        if self.candidates.is_empty() {
            return false;
        }
        let old = self.cursor;
        if self.cursor >= self.page_size {
            self.cursor -= self.page_size;
        } else {
            let last_page_start = (self.candidates.len() - 1) / self.page_size * self.page_size;
            self.cursor = (last_page_start + self.cursor).min(self.candidates.len() - 1);
        }
        self.cursor != old
    }

    /// Jump one page forward, wrapping from the last page to the first.
    /// Returns true if the cursor moved.
    pub fn page_down(&mut self) -> bool {
        if self.candidates.is_empty() {
            return false;
        }
        let old = self.cursor;
        let next_page_start = (self.current_page() + 1) * self.page_size;
        if next_page_start >= self.candidates.len() {
            self.cursor %= self.page_size;
        } else {
            self.cursor = (self.cursor + self.page_size).min(self.candidates.len() - 1);
        }
        self.cursor != old
    }

    /// Remove all candidates.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.cursor = 0;
    }
}
