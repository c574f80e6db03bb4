//! Pure-logic ports of the page's one-shot UI behaviors. No DOM, no
//! timers: time advances through explicit millisecond ticks.

pub mod counter;
pub mod typewriter;
pub mod slider;
pub mod form;
pub mod pricing;
pub mod scroll;
