//! Typewriter text effect
//!
//! Reveals a string one character per tick. The caller shows a cursor next
//! to the text while typing is in progress and drops it once the full text
//! is out. Operates on chars, not bytes, so non-ASCII copy types correctly

/// Default delay between revealed characters, in milliseconds.
pub const CHAR_DELAY_MS: u64 = 100;

#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>, // full text, one entry per displayed character
    revealed: usize, // how many leading chars are visible
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    /// Reveal the next character. Returns `true` while typing continues,
    /// `false` once the full text is already out.
    pub fn tick(&mut self) -> bool {
        if self.revealed < self.chars.len() {
            self.revealed += 1;
            true
        } else {
            false
        }
    }

    /// Currently visible prefix.
    pub fn text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    /// The blinking cursor stays up until the last character is revealed.
    pub fn cursor_visible(&self) -> bool {
        !self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.revealed == self.chars.len()
    }
}
