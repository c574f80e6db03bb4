//! Testimonial slider
//!
//! Index-cycling state for an N-slide carousel: next/prev with wraparound,
//! direct jumps from the dot row, and an autoplay timer that advances every
//! 5 seconds and is reset by any manual navigation

/// Autoplay interval, in milliseconds.
pub const AUTOPLAY_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct Slider {
    len: usize, // number of slides
    current: usize, // active slide index
    elapsed_ms: u64, // time since the last navigation, manual or automatic
}

impl Slider {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0, elapsed_ms: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Active dot index is always the active slide index.
    pub fn active_dot(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + 1) % self.len;
        self.elapsed_ms = 0;
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + self.len - 1) % self.len;
        self.elapsed_ms = 0;
    }

    /// Jump straight to slide `index` (dot click). Out-of-range indices are
    /// ignored.
    pub fn show(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
            self.elapsed_ms = 0;
        }
    }

    /// Advance the autoplay clock by `ms`. Every full interval moves to the
    /// next slide; navigation (including autoplay itself) restarts the
    /// interval.
    pub fn advance(&mut self, ms: u64) {
        if self.len == 0 {
            return;
        }
        self.elapsed_ms += ms;
        while self.elapsed_ms >= AUTOPLAY_MS {
            let leftover = self.elapsed_ms - AUTOPLAY_MS;
            self.next(); // zeroes elapsed_ms
            self.elapsed_ms = leftover;
        }
    }
}
