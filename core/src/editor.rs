//! Editor trait and implementations.
//!
//! An editor owns one piece of input state, turns key events into changes
//! of that state and pushes the result to a `RenderAdapter`. The host keeps
//! routing keys to an active editor until it reports itself inactive again.

pub mod punctuation;

pub use punctuation::{PunctMode, PunctuationEditor};

use crate::key_event::{KeyEvent, KeyResult, Modifiers};

/// Editor trait for handling input in a specific mode.
///
/// # Example
///
/// ```
/// use libchinese_punct::{Config, Editor, KeyEvent, KeyResult, Modifiers, PunctuationEditor};
///
/// let mut editor = PunctuationEditor::new(Config::default());
/// let editor: &mut dyn Editor = &mut editor;
/// assert_eq!(editor.process_key_event(KeyEvent::Char('`'), Modifiers::empty()), KeyResult::Handled);
/// assert!(editor.is_active());
/// ```
pub trait Editor {
    /// Process a key event in this editor's context.
    ///
    /// Returns `KeyResult::NotHandled` when the key should go back to the
    /// host (or to another editor).
    fn process_key_event(&mut self, key: KeyEvent, modifiers: Modifiers) -> KeyResult;

    /// A visible candidate row was clicked. `index` is relative to the page.
    fn candidate_clicked(&mut self, index: usize, button: u32, state: Modifiers);

    /// Drop all input state and hide everything.
    fn reset(&mut self);

    /// Push the full current state to the render adapter.
    fn update(&mut self);

    /// Whether the editor is holding input and wants further keys.
    fn is_active(&self) -> bool;

    /// Get a human-readable name for this editor (for debugging/logging).
    fn name(&self) -> &'static str;
}
