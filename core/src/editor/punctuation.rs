//! Punctuation editor for full-width punctuation selection.
//!
//! Typing the trigger character (backtick by default) opens the editor.
//! Every following ASCII punctuation, digit or letter is kept in the buffer
//! together with the variant chosen for it; the first variant is chosen by
//! default and browsing the candidate list replaces the choice for the
//! character before the cursor. Space commits the resolved string, Enter
//! commits the raw keys.
//!
//! Modes:
//! - `Disabled`: nothing typed, only the trigger is accepted
//! - `Initiating`: the trigger alone is in the buffer as a probe
//! - `Composing`: one or more real characters, each with a selection

use std::sync::Arc;

use tracing::{debug, trace};

use super::Editor;
use crate::candidate::CandidateList;
use crate::context::{ImeContext, RenderAdapter};
use crate::input_buffer::{InputBuffer, PunctChar};
use crate::key_event::{KeyEvent, KeyResult, Modifiers};
use crate::punct_table::PunctTable;
use crate::text::{StyledText, Underline};
use crate::Config;

/// ASCII punctuation accepted while composing (digits and letters are too).
const PUNCT_KEYS: &str = "`~!@#$%^&*()-_=+[]{}\\|:;'\",.<>/?";

/// Editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PunctMode {
    #[default]
    Disabled,
    Initiating,
    Composing,
}

/// Punctuation substitution editor.
///
/// Owns the typed characters with their selections, the candidate set for
/// the character before the cursor and the paged list showing it. All view
/// changes go to the render adapter `R`.
pub struct PunctuationEditor<R: RenderAdapter = ImeContext> {
    config: Config,

    table: Arc<PunctTable>,

    mode: PunctMode,

    /// Typed characters paired with their chosen variants
    buffer: InputBuffer,

    /// Variants of the character before the cursor, in rank order
    candidates: Vec<Arc<str>>,

    /// Paged view over `candidates`
    lookup_table: CandidateList,

    render: R,
}

impl PunctuationEditor<ImeContext> {
    /// Create an editor over the standard table, recording into an `ImeContext`.
    pub fn new(config: Config) -> Self {
        Self::with_adapter(config, PunctTable::standard(), ImeContext::new())
    }

    /// Get a reference to the context for reading IME state.
    pub fn context(&self) -> &ImeContext {
        &self.render
    }

    /// Get a mutable reference to the context (e.g. to take commit text).
    pub fn context_mut(&mut self) -> &mut ImeContext {
        &mut self.render
    }
}

impl Default for PunctuationEditor<ImeContext> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<R: RenderAdapter> PunctuationEditor<R> {
    /// Create an editor with a custom table and render adapter.
    pub fn with_adapter(config: Config, table: Arc<PunctTable>, render: R) -> Self {
        let lookup_table = CandidateList::with_page_size(config.page_size);
        let mut editor = Self {
            config,
            table,
            mode: PunctMode::Disabled,
            buffer: InputBuffer::new(),
            candidates: Vec::new(),
            lookup_table,
            render,
        };
        editor.fill_lookup_table();
        editor
    }

    /// Current editor mode.
    pub fn mode(&self) -> PunctMode {
        self.mode
    }

    /// Typed characters with their selections.
    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// Cursor position in the buffer (character index).
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Raw typed characters.
    pub fn text(&self) -> String {
        self.buffer.raw_text()
    }

    /// Current candidate set.
    pub fn candidates(&self) -> &[Arc<str>] {
        &self.candidates
    }

    /// Paged candidate list as last built.
    pub fn lookup_table(&self) -> &CandidateList {
        &self.lookup_table
    }

    /// Variant table used for lookups.
    pub fn table(&self) -> &Arc<PunctTable> {
        &self.table
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Changes to page size and orientation apply the next time the
    /// candidate list is rebuilt.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Get a reference to the render adapter.
    pub fn render(&self) -> &R {
        &self.render
    }

    /// Get a mutable reference to the render adapter.
    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    /// Decode a raw host key (X11 keysym plus modifier state) and process it.
    pub fn process_keysym(&mut self, keyval: u32, _keycode: u32, state: u32) -> KeyResult {
        self.process_key_event(KeyEvent::from_keysym(keyval), Modifiers::from_bits_truncate(state))
    }

    /// Insert a character at the cursor. This is the only way the buffer grows.
    ///
    /// # Panics
    ///
    /// While `Disabled`, anything other than the trigger character is a
    /// protocol violation.
    pub fn insert(&mut self, ch: char) -> bool {
        match self.mode {
            PunctMode::Disabled => {
                assert_eq!(
                    ch, self.config.trigger,
                    "only the trigger character can open punctuation mode"
                );
                assert_eq!(self.buffer.cursor(), 0, "disabled editor with a non-empty buffer");
                self.update_candidates_for(ch);
                let probe = PunctChar::new(ch, self.candidates.first().cloned());
                self.buffer.insert(probe);
                self.set_mode(PunctMode::Initiating);
            }
            PunctMode::Initiating | PunctMode::Composing => {
                if self.mode == PunctMode::Initiating {
                    // the trigger was only a probe
                    self.buffer.clear();
                }
                self.update_candidates_for(ch);
                let entry = PunctChar::new(ch, self.candidates.first().cloned());
                self.buffer.insert(entry);
                self.set_mode(PunctMode::Composing);
            }
        }
        self.update();
        true
    }

    /// Handle a key that did not match any editing key.
    ///
    /// # Panics
    ///
    /// When called while `Disabled` with anything but the trigger character.
    pub fn process_punctuation_key(&mut self, key: KeyEvent, modifiers: Modifiers) -> KeyResult {
        if modifiers.has_command() {
            return KeyResult::Handled;
        }

        if self.mode == PunctMode::Disabled && key == KeyEvent::Char(self.config.trigger) {
            return self.insert(self.config.trigger).into();
        }

        assert_ne!(
            self.mode,
            PunctMode::Disabled,
            "punctuation key {:?} delivered to a disabled editor",
            key
        );

        match key {
            KeyEvent::Char(ch) if self.is_punct_key(ch) => self.insert(ch).into(),
            _ => KeyResult::NotHandled,
        }
    }

    fn is_punct_key(&self, ch: char) -> bool {
        ch == self.config.trigger || ch.is_ascii_alphanumeric() || PUNCT_KEYS.contains(ch)
    }

    fn process_space(&mut self, modifiers: Modifiers) -> KeyResult {
        if self.buffer.is_empty() {
            return KeyResult::NotHandled;
        }
        if modifiers.has_command() {
            return KeyResult::Handled;
        }
        if !self.lookup_table.is_empty() {
            self.select_candidate(self.lookup_table.cursor_pos());
        } else {
            self.commit();
        }
        KeyResult::Handled
    }

    /// Confirm the current selections and commit them.
    ///
    /// `index` (absolute) only names the row that triggered the action; the
    /// committed text is what the selections already hold. While initiating
    /// that is the variant under the list cursor, while composing it is the
    /// whole buffer resolved by its selections.
    /// Returns false for an index outside the list.
    pub fn select_candidate(&mut self, index: usize) -> bool {
        if index >= self.lookup_table.len() {
            return false;
        }

        let output = match self.mode {
            PunctMode::Disabled => unreachable!("disabled editor has an empty candidate list"),
            PunctMode::Initiating => self.candidates[self.lookup_table.cursor_pos()].to_string(),
            PunctMode::Composing => self.buffer.resolved_text(),
        };

        self.reset();
        self.commit_str(&output);
        true
    }

    /// Confirm a candidate by its row on the visible page.
    pub fn select_candidate_in_page(&mut self, index: usize) -> bool {
        let page_size = self.lookup_table.page_size();
        if index >= page_size {
            return false;
        }
        let page_start = self.lookup_table.cursor_pos() / page_size * page_size;
        self.select_candidate(page_start + index)
    }

    /// Commit the raw typed characters and reset.
    pub fn commit(&mut self) {
        let text = self.buffer.raw_text();
        self.commit_str(&text);
        self.reset();
    }

    fn commit_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        debug!(text, "commit punctuation");
        self.render.commit_text(text);
    }

    pub fn page_up(&mut self) -> bool {
        self.browse(CandidateList::page_up)
    }

    pub fn page_down(&mut self) -> bool {
        self.browse(CandidateList::page_down)
    }

    pub fn cursor_up(&mut self) -> bool {
        self.browse(CandidateList::cursor_up)
    }

    pub fn cursor_down(&mut self) -> bool {
        self.browse(CandidateList::cursor_down)
    }

    /// Move the candidate cursor; while composing the selection of the
    /// character before the cursor follows it.
    fn browse(&mut self, step: fn(&mut CandidateList) -> bool) -> bool {
        if !step(&mut self.lookup_table) {
            return false;
        }
        if self.mode == PunctMode::Composing {
            self.sync_selection();
        }
        self.render.show_candidates(&self.lookup_table, true);
        self.update_preedit_text();
        self.update_auxiliary_text();
        true
    }

    /// Store the candidate under the list cursor as the selection of the
    /// character before the buffer cursor.
    fn sync_selection(&mut self) {
        let Some(variant) = self.candidates.get(self.lookup_table.cursor_pos()).cloned() else {
            return;
        };
        if let Some(entry) = self.buffer.before_cursor_mut() {
            entry.variant = Some(variant);
        }
    }

    pub fn move_cursor_left(&mut self) -> bool {
        if !self.buffer.move_left() {
            return false;
        }
        self.restore_candidates();
        self.update();
        true
    }

    pub fn move_cursor_right(&mut self) -> bool {
        if !self.buffer.move_right() {
            return false;
        }
        self.restore_candidates();
        self.update();
        true
    }

    /// # Panics
    ///
    /// Outside `Composing` when the cursor is not already at the start.
    pub fn move_cursor_to_begin(&mut self) -> bool {
        if self.buffer.cursor() == 0 {
            return false;
        }
        assert_eq!(self.mode, PunctMode::Composing, "cursor jump outside composing mode");
        self.buffer.move_to_start();
        self.clear_candidates();
        self.update();
        true
    }

    /// # Panics
    ///
    /// Outside `Composing` when the cursor is not already at the end.
    pub fn move_cursor_to_end(&mut self) -> bool {
        if self.buffer.cursor() == self.buffer.len() {
            return false;
        }
        assert_eq!(self.mode, PunctMode::Composing, "cursor jump outside composing mode");
        self.buffer.move_to_end();
        self.restore_candidates();
        self.update();
        true
    }

    /// Backspace.
    pub fn remove_char_before(&mut self) -> bool {
        if self.buffer.remove_before().is_none() {
            return false;
        }
        if self.buffer.is_empty() {
            self.reset();
            return true;
        }
        self.restore_candidates();
        self.update();
        true
    }

    /// Delete. The cursor stays, so the candidate set is still valid.
    pub fn remove_char_after(&mut self) -> bool {
        if self.buffer.remove_after().is_none() {
            return false;
        }
        if self.buffer.is_empty() {
            self.reset();
        } else {
            self.update();
        }
        true
    }

    /// Recompute candidates for the character before the cursor and point
    /// the list at the variant already chosen for it.
    fn restore_candidates(&mut self) {
        let Some(entry) = self.buffer.before_cursor().cloned() else {
            self.clear_candidates();
            return;
        };
        self.update_candidates_for(entry.ch);
        if let Some(variant) = entry.variant {
            let Some(index) = self.candidates.iter().position(|c| *c == variant) else {
                unreachable!("selection {:?} missing from the variants of {:?}", variant, entry.ch);
            };
            self.lookup_table.set_cursor_pos(index);
        }
    }

    /// Replace the candidate set with the variants of `ch`.
    fn update_candidates_for(&mut self, ch: char) {
        self.candidates.clear();
        if let Some(variants) = self.table.lookup(ch) {
            self.candidates.extend(variants.iter().cloned());
        }
        trace!(?ch, count = self.candidates.len(), "punctuation candidates");
        self.fill_lookup_table();
    }

    fn clear_candidates(&mut self) {
        self.candidates.clear();
        self.fill_lookup_table();
    }

    /// Rebuild the paged list from the candidate set and current config.
    fn fill_lookup_table(&mut self) {
        self.lookup_table.clear();
        self.lookup_table.set_page_size(self.config.page_size);
        self.lookup_table.set_orientation(self.config.orientation);
        for candidate in &self.candidates {
            self.lookup_table
                .append_candidate(StyledText::colored(candidate.to_string(), self.config.candidate_color));
        }
    }

    fn set_mode(&mut self, mode: PunctMode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "punctuation mode change");
            self.mode = mode;
        }
    }

    fn update_lookup_table(&mut self) {
        if self.lookup_table.is_empty() {
            self.render.hide_candidates();
        } else {
            self.render.show_candidates(&self.lookup_table, false);
        }
    }

    fn update_preedit_text(&mut self) {
        match self.mode {
            PunctMode::Disabled => self.render.hide_preedit(),
            PunctMode::Initiating => {
                let text = match self.candidates.get(self.lookup_table.cursor_pos()) {
                    Some(variant) => variant.to_string(),
                    None => self.buffer.raw_text(),
                };
                let cursor = if self.buffer.cursor() == 0 {
                    0
                } else {
                    text.chars().count()
                };
                let preedit = StyledText::underlined(text, Underline::Single);
                self.render.show_preedit(&preedit, cursor);
            }
            PunctMode::Composing => {
                let preedit = StyledText::underlined(self.buffer.resolved_text(), Underline::Single);
                self.render.show_preedit(&preedit, self.buffer.resolved_cursor());
            }
        }
    }

    fn update_auxiliary_text(&mut self) {
        match self.mode {
            PunctMode::Disabled => self.render.hide_auxiliary(),
            PunctMode::Initiating | PunctMode::Composing => {
                let aux = StyledText::new(self.buffer.raw_text_with_cursor());
                self.render.show_auxiliary(&aux);
            }
        }
    }
}

impl<R: RenderAdapter> Editor for PunctuationEditor<R> {
    fn process_key_event(&mut self, key: KeyEvent, modifiers: Modifiers) -> KeyResult {
        let modifiers = modifiers & Modifiers::STANDARD;
        trace!(?key, ?modifiers, mode = ?self.mode, "punctuation key event");

        // only the trigger opens the editor; everything else belongs to the host
        if self.mode == PunctMode::Disabled && key != KeyEvent::Char(self.config.trigger) {
            return KeyResult::NotHandled;
        }

        match key {
            KeyEvent::Space => self.process_space(modifiers),
            KeyEvent::Enter => {
                self.commit();
                KeyResult::Handled
            }
            KeyEvent::Escape => {
                self.reset();
                KeyResult::Handled
            }
            KeyEvent::Backspace => {
                self.remove_char_before();
                KeyResult::Handled
            }
            KeyEvent::Delete => {
                self.remove_char_after();
                KeyResult::Handled
            }
            KeyEvent::Left => {
                self.move_cursor_left();
                KeyResult::Handled
            }
            KeyEvent::Right => {
                self.move_cursor_right();
                KeyResult::Handled
            }
            KeyEvent::Home => {
                if self.mode == PunctMode::Composing {
                    self.move_cursor_to_begin();
                }
                KeyResult::Handled
            }
            KeyEvent::End => {
                if self.mode == PunctMode::Composing {
                    self.move_cursor_to_end();
                }
                KeyResult::Handled
            }
            KeyEvent::Up => {
                self.cursor_up();
                KeyResult::Handled
            }
            KeyEvent::Down => {
                self.cursor_down();
                KeyResult::Handled
            }
            KeyEvent::PageUp => {
                self.page_up();
                KeyResult::Handled
            }
            KeyEvent::PageDown | KeyEvent::Tab => {
                self.page_down();
                KeyResult::Handled
            }
            KeyEvent::Char(_) | KeyEvent::Other(_) => self.process_punctuation_key(key, modifiers),
        }
    }

    fn candidate_clicked(&mut self, index: usize, _button: u32, _state: Modifiers) {
        self.select_candidate_in_page(index);
    }

    fn reset(&mut self) {
        if self.mode != PunctMode::Disabled {
            debug!(from = ?self.mode, "punctuation mode reset");
        }
        self.mode = PunctMode::Disabled;
        self.buffer.clear();
        self.candidates.clear();
        self.fill_lookup_table();
        self.update();
    }

    fn update(&mut self) {
        self.update_lookup_table();
        self.update_preedit_text();
        self.update_auxiliary_text();
    }

    fn is_active(&self) -> bool {
        self.mode != PunctMode::Disabled
    }

    fn name(&self) -> &'static str {
        "PunctuationEditor"
    }
}
