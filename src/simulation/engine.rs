//! Frame-loop engine for the particle field
//!
//! The original page drives the field with a self-rescheduling
//! animation-frame callback and draws straight to a 2D context. Both host
//! services are modeled as traits here so the loop can run against a real
//! renderer or a test double:
//! - [`Canvas`] — immediate-mode drawing surface (clear + filled circle)
//! - [`FrameScheduler`] — "schedule next tick" primitive, with an explicit
//!   cancel path the original never exposes, so tests can halt the loop
//!
//! The bevy viewer does not go through `animate`; its Update schedule *is*
//! the frame scheduler and entity transforms stand in for the canvas.

use super::field::update_particle;
use super::params::Params;
use super::states::{Field, NVec2, Pointer, Rgba};

/// Immediate-mode drawing surface the field renders each frame to.
pub trait Canvas {
    /// Erase the whole surface.
    fn clear(&mut self);
    /// Draw a filled circle of `radius` centered at `center`.
    fn fill_circle(&mut self, center: NVec2, radius: f64, color: Rgba);
}

/// Per-frame scheduling primitive. The next tick must be requested anew
/// every frame; `request_frame` returning `false` ends the loop.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> bool;
    fn cancel(&mut self);
}

/// Scheduler granting a fixed number of ticks, then stopping.
///
/// `FrameBudget::unlimited()` reproduces the original page's behavior: the
/// loop self-perpetuates until the host tears it down.
#[derive(Debug, Clone)]
pub struct FrameBudget {
    remaining: Option<u64>, // None = no budget, run forever
    cancelled: bool,
}

impl FrameBudget {
    pub fn frames(n: u64) -> Self {
        Self { remaining: Some(n), cancelled: false }
    }

    pub fn unlimited() -> Self {
        Self { remaining: None, cancelled: false }
    }
}

impl FrameScheduler for FrameBudget {
    fn request_frame(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        match self.remaining.as_mut() {
            None => true,
            Some(0) => false,
            Some(n) => {
                *n -= 1;
                true
            }
        }
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// Render one frame: clear the surface, then update and draw every
/// particle in population order (update and draw interleave per particle,
/// as on the original page).
pub fn frame<C: Canvas>(field: &mut Field, pointer: &Pointer, params: &Params, canvas: &mut C) {
    canvas.clear();
    let (width, height) = (field.width, field.height);
    for p in field.particles.iter_mut() {
        update_particle(p, width, height, pointer, params);
        canvas.fill_circle(p.x, p.size, p.color);
    }
}

/// Run the animation loop until the scheduler declines the next tick.
///
/// The next frame is requested *before* any frame work, mirroring the
/// original's requestAnimationFrame-first ordering. `pointer` is the
/// latest externally-updated snapshot, re-read every frame.
pub fn animate<C, S>(
    field: &mut Field,
    pointer: &Pointer,
    params: &Params,
    canvas: &mut C,
    scheduler: &mut S,
) where
    C: Canvas,
    S: FrameScheduler,
{
    while scheduler.request_frame() {
        frame(field, pointer, params, canvas);
    }
}
