//! Styled text handed to the render adapter.
//!
//! Preedit, auxiliary text and candidate entries are all plain strings with a
//! list of display attributes attached. Attribute ranges are measured in
//! characters, not bytes, because that is what input method front-ends
//! expect.

use std::ops::Range;

/// Underline style for preedit text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Underline {
    Single,
}

/// What an attribute does to its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Underline(Underline),
    /// Foreground colour as 0xRRGGBB
    Foreground(u32),
}

/// A display attribute over a character range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub kind: AttributeKind,
    /// Character range in the owning text
    pub range: Range<usize>,
}

/// Text together with its display attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    pub text: String,
    pub attributes: Vec<Attribute>,
}

impl StyledText {
    /// Create unstyled text.
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            attributes: Vec::new(),
        }
    }

    /// Create text underlined from start to end.
    pub fn underlined<T: Into<String>>(text: T, style: Underline) -> Self {
        let mut styled = Self::new(text);
        styled.append_attribute_to_end(AttributeKind::Underline(style), 0);
        styled
    }

    /// Create text coloured from start to end.
    pub fn colored<T: Into<String>>(text: T, rgb: u32) -> Self {
        let mut styled = Self::new(text);
        styled.append_attribute_to_end(AttributeKind::Foreground(rgb), 0);
        styled
    }

    /// Add an attribute over `range` (characters).
    pub fn append_attribute(&mut self, kind: AttributeKind, range: Range<usize>) {
        self.attributes.push(Attribute { kind, range });
    }

    /// Add an attribute from `start` to the current end of the text.
    pub fn append_attribute_to_end(&mut self, kind: AttributeKind, start: usize) {
        let end = self.char_len();
        self.append_attribute(kind, start..end);
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underlined_spans_whole_text_in_chars() {
        let text = StyledText::underlined("，。", Underline::Single);
        assert_eq!(text.char_len(), 2);
        assert_eq!(
            text.attributes,
            vec![Attribute {
                kind: AttributeKind::Underline(Underline::Single),
                range: 0..2,
            }]
        );
    }

    #[test]
    fn test_colored() {
        let text = StyledText::colored("……", 0x004466);
        assert_eq!(text.attributes[0].kind, AttributeKind::Foreground(0x004466));
        assert_eq!(text.attributes[0].range, 0..2);
    }

    #[test]
    fn test_append_attribute() {
        let mut text = StyledText::new("abc");
        text.append_attribute(AttributeKind::Foreground(0xffffff), 1..2);
        assert_eq!(text.attributes.len(), 1);
        assert_eq!(text.as_str(), "abc");
        assert!(!text.is_empty());
    }
}
