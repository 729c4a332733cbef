use std::fmt;

/// One of the 26 bindable letter keys.
///
/// Only letters participate in key binding and triggering; every other key
/// is permanently unbindable, which is enforced here by construction: the
/// checked parsers below are the only way to obtain a `Letter`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Number of symbols in the bindable alphabet.
    pub const COUNT: usize = 26;

    /// Parse a single character, case-insensitively.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Parse a host key code of the form `"KeyA"`..`"KeyZ"`.
    ///
    /// Anything else (digits, function keys, modifiers, multi-letter codes)
    /// is rejected.
    pub fn from_key_code(code: &str) -> Option<Self> {
        let rest = code.strip_prefix("Key")?;
        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => Self::from_char(c),
            _ => None,
        }
    }

    /// Whether a host key code denotes a bindable letter.
    pub fn is_bindable(code: &str) -> bool {
        Self::from_key_code(code).is_some()
    }

    /// The uppercase character for display.
    pub fn as_char(self) -> char {
        (self.0 + b'A') as char
    }

    /// The host key code form, e.g. `"KeyA"`.
    pub fn key_code(self) -> String {
        format!("Key{}", self.as_char())
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Letter({})", self.as_char())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
