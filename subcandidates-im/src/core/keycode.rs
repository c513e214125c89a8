//! Key code definitions and key event handling

use std::fmt;

/// Key symbol (keysym) values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keysym(pub u32);

impl Keysym {
    // Common key symbols (XKB keysym values)
    pub const BACKSPACE: Keysym = Keysym(0xff08);
    pub const TAB: Keysym = Keysym(0xff09);
    pub const RETURN: Keysym = Keysym(0xff0d);
    pub const ESCAPE: Keysym = Keysym(0xff1b);

    // Cursor movement
    pub const LEFT: Keysym = Keysym(0xff51);
    pub const UP: Keysym = Keysym(0xff52);
    pub const RIGHT: Keysym = Keysym(0xff53);
    pub const DOWN: Keysym = Keysym(0xff54);
    pub const PAGE_UP: Keysym = Keysym(0xff55);
    pub const PAGE_DOWN: Keysym = Keysym(0xff56);

    // Modifiers
    pub const SHIFT_L: Keysym = Keysym(0xffe1);
    pub const SHIFT_R: Keysym = Keysym(0xffe2);
    pub const CONTROL_L: Keysym = Keysym(0xffe3);
    pub const CONTROL_R: Keysym = Keysym(0xffe4);
    pub const META_L: Keysym = Keysym(0xffe7);
    pub const META_R: Keysym = Keysym(0xffe8);
    pub const ALT_L: Keysym = Keysym(0xffe9);
    pub const ALT_R: Keysym = Keysym(0xffea);
    pub const SUPER_L: Keysym = Keysym(0xffeb);
    pub const SUPER_R: Keysym = Keysym(0xffec);

    // Space
    pub const SPACE: Keysym = Keysym(0x0020);

    /// Key names accepted in settings, with their keysyms
    const NAMED: &'static [(&'static str, Keysym)] = &[
        ("space", Self::SPACE),
        ("return", Self::RETURN),
        ("tab", Self::TAB),
        ("escape", Self::ESCAPE),
        ("backspace", Self::BACKSPACE),
        ("left", Self::LEFT),
        ("up", Self::UP),
        ("right", Self::RIGHT),
        ("down", Self::DOWN),
        ("page_up", Self::PAGE_UP),
        ("page_down", Self::PAGE_DOWN),
    ];

    /// Look up a key by its settings name (case-insensitive).
    /// A single printable ASCII character names itself.
    pub fn from_name(name: &str) -> Option<Keysym> {
        let lower = name.trim().to_ascii_lowercase();
        if lower == "enter" {
            return Some(Self::RETURN);
        }
        if let Some((_, keysym)) = Self::NAMED.iter().find(|(n, _)| *n == lower) {
            return Some(*keysym);
        }
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_graphic() => Some(Keysym(ch as u32)),
            _ => None,
        }
    }

    /// The settings name of this key, if it has one
    pub fn name(&self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(_, keysym)| keysym == self)
            .map(|(n, _)| *n)
    }

    /// Start of the keysym range that carries Unicode code points
    const UNICODE_BASE: u32 = 0x0100_0000;

    /// Keysym for a typed character. ASCII maps to itself, everything else
    /// to the Unicode range so it cannot collide with the 0xff00 keys.
    pub fn from_char(ch: char) -> Keysym {
        let code = ch as u32;
        if (0x0020..=0x007e).contains(&code) {
            Keysym(code)
        } else {
            Keysym(Self::UNICODE_BASE | code)
        }
    }

    /// Check if this keysym represents a printable character
    pub fn is_printable(&self) -> bool {
        self.to_char().is_some()
    }

    /// Try to convert this keysym to a character
    pub fn to_char(&self) -> Option<char> {
        match self.0 {
            // ASCII printable range
            0x0020..=0x007e => char::from_u32(self.0),
            0x0100_0000..=0x0110_ffff => {
                char::from_u32(self.0 - Self::UNICODE_BASE).filter(|ch| !ch.is_control())
            }
            _ => None,
        }
    }

    /// Check if this keysym is a digit (1-9)
    pub fn digit_value(&self) -> Option<usize> {
        match self.0 {
            0x0031..=0x0039 => Some((self.0 - 0x0030) as usize),
            _ => None,
        }
    }

    /// Check if this is a modifier key
    pub fn is_modifier(&self) -> bool {
        matches!(
            *self,
            Self::SHIFT_L
                | Self::SHIFT_R
                | Self::CONTROL_L
                | Self::CONTROL_R
                | Self::ALT_L
                | Self::ALT_R
                | Self::META_L
                | Self::META_R
                | Self::SUPER_L
                | Self::SUPER_R
        )
    }
}

impl fmt::Display for Keysym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            write!(f, "{}", name)
        } else if let Some(ch) = self.to_char() {
            write!(f, "{}", ch)
        } else {
            write!(f, "Keysym(0x{:04x})", self.0)
        }
    }
}

/// Key modifier flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift_key: bool,
    pub control_key: bool,
    pub alt_key: bool,
    pub super_key: bool,
}

impl KeyModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift_key = shift;
        self
    }

    pub fn with_control(mut self, control: bool) -> Self {
        self.control_key = control;
        self
    }

    pub fn with_alt(mut self, alt: bool) -> Self {
        self.alt_key = alt;
        self
    }

    /// Ctrl, Alt or Super held: the key is a shortcut, not text
    pub fn is_chord(&self) -> bool {
        self.control_key || self.alt_key || self.super_key
    }
}

/// A key event
#[derive(Debug, Clone)]
pub struct KeyEvent {
    /// The key symbol
    pub keysym: Keysym,
    /// Modifier key state
    pub modifiers: KeyModifiers,
    /// Whether this is a key press (true) or release (false)
    pub is_press: bool,
}

impl KeyEvent {
    pub fn new(keysym: Keysym, modifiers: KeyModifiers, is_press: bool) -> Self {
        Self {
            keysym,
            modifiers,
            is_press,
        }
    }

    /// Create a simple key press event without modifiers
    pub fn press(keysym: Keysym) -> Self {
        Self::new(keysym, KeyModifiers::default(), true)
    }

    /// Press of a printable character
    pub fn char(ch: char) -> Self {
        Self::press(Keysym::from_char(ch))
    }

    /// Check if this is a printable character key press
    pub fn is_printable_press(&self) -> bool {
        self.is_press && self.keysym.is_printable() && !self.modifiers.is_chord()
    }

    /// Get the character for this key event if it's a printable press
    pub fn to_char(&self) -> Option<char> {
        if self.is_printable_press() {
            self.keysym.to_char()
        } else {
            None
        }
    }
}
