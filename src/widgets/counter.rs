//! Numeric counter animator
//!
//! Counts from 0 up to a target value over a fixed duration, advanced in
//! discrete ticks. While running, the displayed value is the floor of the
//! accumulator; on completion it snaps to the exact target and stays there

/// Tick period the increment is derived from, in milliseconds.
pub const TICK_MS: f64 = 16.0;

/// Default animation duration, in milliseconds.
pub const DURATION_MS: f64 = 2000.0;

#[derive(Debug, Clone)]
pub struct Counter {
    target: f64, // final displayed value
    value: f64, // running accumulator
    increment: f64, // added per tick: target / (duration / tick)
    done: bool,
}

impl Counter {
    pub fn new(target: f64) -> Self {
        Self::with_duration(target, DURATION_MS)
    }

    pub fn with_duration(target: f64, duration_ms: f64) -> Self {
        Self {
            target,
            value: 0.0,
            increment: target / (duration_ms / TICK_MS),
            done: false,
        }
    }

    /// Advance one tick and return the value to display.
    pub fn tick(&mut self) -> i64 {
        if self.done {
            return self.target as i64;
        }
        self.value += self.increment;
        if self.value >= self.target {
            self.done = true;
            self.target as i64
        } else {
            self.value.floor() as i64
        }
    }

    pub fn display(&self) -> i64 {
        if self.done {
            self.target as i64
        } else {
            self.value.floor() as i64
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}
