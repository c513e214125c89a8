//! Marked text handed to the host
//!
//! The host renders the uncommitted composition (marked text) with a caret
//! and a style that tells raw input apart from converted text.

/// How the host should style marked text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreeditStyle {
    /// Raw input that has not been converted
    #[default]
    Underline,
    /// Converted text backed by the selected candidate
    Highlight,
}

/// Marked text with caret position and style
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preedit {
    text: String,
    /// Caret position in characters
    caret: usize,
    style: PreeditStyle,
}

impl Preedit {
    /// Raw input with the caret at its end
    pub fn underlined(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.chars().count();
        Self {
            text,
            caret,
            style: PreeditStyle::Underline,
        }
    }

    /// Converted text with the caret at `caret` (clamped)
    pub fn highlighted(text: impl Into<String>, caret: usize) -> Self {
        let text = text.into();
        let caret = caret.min(text.chars().count());
        Self {
            text,
            caret,
            style: PreeditStyle::Highlight,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn style(&self) -> PreeditStyle {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underlined_caret_at_end() {
        let preedit = Preedit::underlined("nihon");
        assert_eq!(preedit.caret(), 5);
        assert_eq!(preedit.style(), PreeditStyle::Underline);
    }

    #[test]
    fn test_highlighted_caret_clamped() {
        let preedit = Preedit::highlighted("日本", 7);
        assert_eq!(preedit.caret(), 2);
        assert_eq!(preedit.style(), PreeditStyle::Highlight);
    }
}
