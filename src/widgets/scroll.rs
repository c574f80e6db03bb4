//! Scroll-driven effects: navbar state, active-section highlighting,
//! parallax backgrounds
//!
//! All three are pure functions of the current scroll offset

/// Scroll depth past which the navbar switches to its "scrolled" style.
pub const NAVBAR_THRESHOLD: f64 = 50.0;

/// Lead distance for section highlighting: a section activates while its
/// top is within this many pixels below the scroll position.
pub const SECTION_OFFSET: f64 = 85.0;

/// Default parallax speed for elements that do not set their own.
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_THRESHOLD
}

/// Index of the nav link to highlight: the last section whose top has been
/// scrolled past (with the lead offset). `None` above the first section.
/// `section_tops` are document offsets in page order.
pub fn active_section(scroll_y: f64, section_tops: &[f64]) -> Option<usize> {
    let mut current = None;
    for (i, top) in section_tops.iter().enumerate() {
        if scroll_y >= top - SECTION_OFFSET {
            current = Some(i);
        }
    }
    current
}

/// Vertical background offset for a parallax layer.
pub fn parallax_offset(scroll_y: f64, speed: Option<f64>) -> f64 {
    scroll_y * speed.unwrap_or(DEFAULT_PARALLAX_SPEED)
}
