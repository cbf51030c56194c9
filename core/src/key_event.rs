//! Key events, modifier state and dispatch results.
//!
//! The host toolkit delivers X11-style keysyms together with a modifier
//! bitmask. `KeyEvent` folds those keysyms into the semantic keys the
//! punctuation editor dispatches on, and `Modifiers` mirrors the IBus/GDK
//! state bits so raw host state can be passed through unchanged.

use bitflags::bitflags;

bitflags! {
    /// Modifier state bits, laid out like the IBus/GDK modifier mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        const SHIFT   = 1 << 0;
        const LOCK    = 1 << 1;
        const CONTROL = 1 << 2;
        const MOD1    = 1 << 3;
        const MOD2    = 1 << 4;
        const MOD3    = 1 << 5;
        const MOD4    = 1 << 6;
        const MOD5    = 1 << 7;
        const BUTTON1 = 1 << 8;
        const BUTTON2 = 1 << 9;
        const BUTTON3 = 1 << 10;
        const BUTTON4 = 1 << 11;
        const BUTTON5 = 1 << 12;
        const SUPER   = 1 << 26;
        const HYPER   = 1 << 27;
        const META    = 1 << 28;
        const RELEASE = 1 << 30;

        /// Bits the editor looks at; everything else is masked off on dispatch.
        const STANDARD = Self::SHIFT.bits()
            | Self::CONTROL.bits()
            | Self::MOD1.bits()
            | Self::SUPER.bits()
            | Self::HYPER.bits()
            | Self::META.bits()
            | Self::LOCK.bits();

        /// Control/alt/super/hyper/meta: chords that never produce punctuation.
        const COMMAND = Self::CONTROL.bits()
            | Self::MOD1.bits()
            | Self::SUPER.bits()
            | Self::HYPER.bits()
            | Self::META.bits();
    }
}

impl Modifiers {
    /// Whether any command modifier is held.
    pub fn has_command(self) -> bool {
        self.intersects(Self::COMMAND)
    }
}

/// Key event types the punctuation editor can process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Printable ASCII character (punctuation, digit or letter)
    Char(char),
    /// Space bar (confirm selection or commit)
    Space,
    /// Return / keypad Enter (commit raw input)
    Enter,
    /// Escape (discard composition)
    Escape,
    /// Backspace (delete before cursor)
    Backspace,
    /// Delete (delete after cursor)
    Delete,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow (candidate cursor up)
    Up,
    /// Down arrow (candidate cursor down)
    Down,
    /// Home (cursor to start of buffer)
    Home,
    /// End (cursor to end of buffer)
    End,
    /// Page up (previous candidate page)
    PageUp,
    /// Page down (next candidate page)
    PageDown,
    /// Tab (next candidate page)
    Tab,
    /// Any other keysym, carried through untouched
    Other(u32),
}

impl KeyEvent {
    /// Decode an X11 keysym. Keypad variants fold onto their main keys.
    pub fn from_keysym(keyval: u32) -> Self {
        match keyval {
            0x0020 => KeyEvent::Space,
            0x0021..=0x007e => match char::from_u32(keyval) {
                Some(ch) => KeyEvent::Char(ch),
                None => KeyEvent::Other(keyval),
            },
            0xff0d | 0xff8d => KeyEvent::Enter,
            0xff1b => KeyEvent::Escape,
            0xff08 => KeyEvent::Backspace,
            0xffff | 0xff9f => KeyEvent::Delete,
            0xff51 | 0xff96 => KeyEvent::Left,
            0xff53 | 0xff98 => KeyEvent::Right,
            0xff52 | 0xff97 => KeyEvent::Up,
            0xff54 | 0xff99 => KeyEvent::Down,
            0xff50 | 0xff95 => KeyEvent::Home,
            0xff57 | 0xff9c => KeyEvent::End,
            0xff55 | 0xff9a => KeyEvent::PageUp,
            0xff56 | 0xff9b => KeyEvent::PageDown,
            0xff09 => KeyEvent::Tab,
            other => KeyEvent::Other(other),
        }
    }
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key was handled by the editor
    Handled,
    /// Key was not handled (pass through to application)
    NotHandled,
}

impl KeyResult {
    pub fn is_handled(self) -> bool {
        self == KeyResult::Handled
    }
}

impl From<bool> for KeyResult {
    fn from(handled: bool) -> Self {
        if handled {
            KeyResult::Handled
        } else {
            KeyResult::NotHandled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_keysyms_become_chars() {
        assert_eq!(KeyEvent::from_keysym(0x60), KeyEvent::Char('`'));
        assert_eq!(KeyEvent::from_keysym(0x2c), KeyEvent::Char(','));
        assert_eq!(KeyEvent::from_keysym(0x41), KeyEvent::Char('A'));
        assert_eq!(KeyEvent::from_keysym(0x20), KeyEvent::Space);
    }

    #[test]
    fn test_keypad_variants_fold() {
        assert_eq!(KeyEvent::from_keysym(0xff8d), KeyEvent::Enter);
        assert_eq!(KeyEvent::from_keysym(0xff9f), KeyEvent::Delete);
        assert_eq!(KeyEvent::from_keysym(0xff96), KeyEvent::Left);
        assert_eq!(KeyEvent::from_keysym(0xff9b), KeyEvent::PageDown);
        assert_eq!(KeyEvent::from_keysym(0xff09), KeyEvent::Tab);
    }

    #[test]
    fn test_unknown_keysym_is_other() {
        assert_eq!(KeyEvent::from_keysym(0xffbe), KeyEvent::Other(0xffbe));
        assert_eq!(KeyEvent::from_keysym(0x4e2d), KeyEvent::Other(0x4e2d));
    }

    #[test]
    fn test_command_modifiers() {
        assert!(!Modifiers::SHIFT.has_command());
        assert!(!(Modifiers::SHIFT | Modifiers::LOCK).has_command());
        assert!(Modifiers::CONTROL.has_command());
        assert!((Modifiers::SHIFT | Modifiers::MOD1).has_command());
        assert!(Modifiers::HYPER.has_command());
    }

    #[test]
    fn test_standard_mask_drops_pointer_and_release_bits() {
        let raw = Modifiers::SHIFT | Modifiers::BUTTON1 | Modifiers::MOD2 | Modifiers::RELEASE;
        assert_eq!(raw & Modifiers::STANDARD, Modifiers::SHIFT);
        let truncated = Modifiers::from_bits_truncate(u32::MAX);
        assert!(truncated.contains(Modifiers::STANDARD));
    }
}
