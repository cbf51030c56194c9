//! Render adapter and the plain-data context platforms read from.
//!
//! The editor pushes every visible change through `RenderAdapter` and never
//! reads anything back. `ImeContext` is the stock adapter: it simply records
//! the latest state in public fields, and the platform copies those fields
//! into its own preedit/auxiliary/candidate widgets after each key.

use crate::candidate::{CandidateList, Orientation};
use crate::text::{Attribute, StyledText};

/// Sink for everything the editor wants to show or commit.
pub trait RenderAdapter {
    /// Show preedit text with the cursor at a character offset.
    fn show_preedit(&mut self, text: &StyledText, cursor: usize);

    fn hide_preedit(&mut self);

    fn show_auxiliary(&mut self, text: &StyledText);

    fn hide_auxiliary(&mut self);

    /// Show the candidate window.
    ///
    /// `fast` is set when only the cursor or page changed; adapters may skip
    /// rebuilding rows that did not change.
    fn show_candidates(&mut self, list: &CandidateList, fast: bool);

    fn hide_candidates(&mut self);

    /// Commit finished text to the application.
    fn commit_text(&mut self, text: &str);
}

/// IME context for platform communication.
///
/// After processing a key event, the platform reads these fields to update
/// preedit text, candidates and commit text.
#[derive(Debug, Clone, Default)]
pub struct ImeContext {
    /// Text being composed
    pub preedit_text: String,

    /// Cursor position within preedit text (character offset)
    pub preedit_cursor: usize,

    /// Display attributes of the preedit
    pub preedit_attributes: Vec<Attribute>,

    pub preedit_visible: bool,

    /// Auxiliary hint text (raw keys with cursor marker)
    pub auxiliary_text: String,

    pub auxiliary_visible: bool,

    /// Candidate strings on the visible page
    pub candidates: Vec<String>,

    /// Highlighted candidate within the visible page (0-based)
    pub candidate_cursor: usize,

    /// Highlighted candidate in the whole list (0-based)
    pub candidate_index: usize,

    /// Visible page (0-based) and total page count
    pub candidate_page: usize,
    pub candidate_pages: usize,

    pub candidate_orientation: Orientation,

    pub candidates_visible: bool,

    /// Whether the last candidate refresh was a fast (cursor-only) update
    pub candidates_fast_update: bool,

    /// Text to commit to the application; accumulates until taken
    pub commit_text: String,
}

impl ImeContext {
    /// Create a new empty IME context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all visible state (preedit, candidates, auxiliary).
    /// Does NOT clear commit_text (platform should consume it first).
    pub fn clear(&mut self) {
        self.hide_preedit();
        self.hide_auxiliary();
        self.hide_candidates();
    }

    /// Take the commit text, leaving it empty.
    pub fn take_commit(&mut self) -> String {
        std::mem::take(&mut self.commit_text)
    }

    /// Check if there's any visible state (preedit, auxiliary or candidates).
    pub fn has_visible_state(&self) -> bool {
        self.preedit_visible || self.auxiliary_visible || self.candidates_visible
    }

    /// Check if there's text to commit.
    pub fn has_commit(&self) -> bool {
        !self.commit_text.is_empty()
    }
}

impl RenderAdapter for ImeContext {
    fn show_preedit(&mut self, text: &StyledText, cursor: usize) {
        self.preedit_text = text.text.clone();
        self.preedit_attributes = text.attributes.clone();
        self.preedit_cursor = cursor;
        self.preedit_visible = true;
    }

    fn hide_preedit(&mut self) {
        self.preedit_text.clear();
        self.preedit_attributes.clear();
        self.preedit_cursor = 0;
        self.preedit_visible = false;
    }

    fn show_auxiliary(&mut self, text: &StyledText) {
        self.auxiliary_text = text.text.clone();
        self.auxiliary_visible = true;
    }

    fn hide_auxiliary(&mut self) {
        self.auxiliary_text.clear();
        self.auxiliary_visible = false;
    }

    fn show_candidates(&mut self, list: &CandidateList, fast: bool) {
        self.candidates = list
            .current_page_candidates()
            .iter()
            .map(|c| c.text.clone())
            .collect();
        self.candidate_cursor = list.cursor_in_page();
        self.candidate_index = list.cursor_pos();
        self.candidate_page = list.current_page();
        self.candidate_pages = list.num_pages();
        self.candidate_orientation = list.orientation();
        self.candidates_fast_update = fast;
        self.candidates_visible = true;
    }

    fn hide_candidates(&mut self) {
        self.candidates.clear();
        self.candidate_cursor = 0;
        self.candidate_index = 0;
        self.candidate_page = 0;
        self.candidate_pages = 0;
        self.candidates_fast_update = false;
        self.candidates_visible = false;
    }

    fn commit_text(&mut self, text: &str) {
        self.commit_text.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Underline;

    fn list_of(n: usize, page_size: usize) -> CandidateList {
        let mut list = CandidateList::with_page_size(page_size);
        for i in 0..n {
            list.append_candidate(StyledText::new(format!("c{}", i)));
        }
        list
    }

    #[test]
    fn test_new_context_is_blank() {
        let ctx = ImeContext::new();
        assert!(!ctx.has_visible_state());
        assert!(!ctx.has_commit());
    }

    #[test]
    fn test_show_and_hide_preedit() {
        let mut ctx = ImeContext::new();
        ctx.show_preedit(&StyledText::underlined("，", Underline::Single), 1);
        assert_eq!(ctx.preedit_text, "，");
        assert_eq!(ctx.preedit_cursor, 1);
        assert_eq!(ctx.preedit_attributes.len(), 1);
        assert!(ctx.has_visible_state());

        ctx.hide_preedit();
        assert!(ctx.preedit_text.is_empty());
        assert!(!ctx.has_visible_state());
    }

    #[test]
    fn test_show_candidates_records_visible_page() {
        let mut ctx = ImeContext::new();
        let mut list = list_of(7, 3);
        list.set_cursor_pos(4);
        ctx.show_candidates(&list, true);
        assert_eq!(ctx.candidates, ["c3", "c4", "c5"]);
        assert_eq!(ctx.candidate_cursor, 1);
        assert_eq!(ctx.candidate_index, 4);
        assert_eq!(ctx.candidate_page, 1);
        assert_eq!(ctx.candidate_pages, 3);
        assert!(ctx.candidates_fast_update);
        assert!(ctx.candidates_visible);
    }

    #[test]
    fn test_commit_accumulates_until_taken() {
        let mut ctx = ImeContext::new();
        ctx.commit_text("，");
        ctx.commit_text("。");
        assert!(ctx.has_commit());
        assert_eq!(ctx.take_commit(), "，。");
        assert!(!ctx.has_commit());
    }

    #[test]
    fn test_clear_keeps_commit() {
        let mut ctx = ImeContext::new();
        ctx.show_auxiliary(&StyledText::new("`"));
        ctx.show_candidates(&list_of(2, 5), false);
        ctx.commit_text("x");
        ctx.clear();
        assert!(!ctx.has_visible_state());
        assert!(ctx.candidates.is_empty());
        assert_eq!(ctx.commit_text, "x");
    }
}
