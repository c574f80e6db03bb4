//! Core state types for the particle field.
//!
//! Defines the runtime structs the stepping and drawing systems operate on:
//! - `Particle` — one drifting point with a fixed radius and color
//! - `Field`    — the whole population plus the surface it lives in
//! - `Pointer`  — last known pointer position and interaction radius
//!
//! Surface coordinates have the origin at the top-left corner with y
//! growing downward, matching the drawable surface the field renders to.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Fixed display color, straight-alpha RGBA in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Default particle color: translucent white.
    pub const PARTICLE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 0.6 };
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2, // position, surface coordinates
    pub v: NVec2, // per-frame drift, constant for the particle's lifetime
    pub size: f64, // radius, > 0
    pub color: Rgba, // fixed display value
}

/// The particle population together with the surface it is confined to.
///
/// The population is only ever replaced wholesale: (re)initialization and
/// resize both discard every particle and spawn a fresh batch.
#[derive(Debug, Clone)]
pub struct Field {
    pub particles: Vec<Particle>, // population, updated in index order each frame
    pub width: f64, // surface width in pixels
    pub height: f64, // surface height in pixels
}

/// Last known pointer state, written by the host's pointer-move events and
/// read (never mutated) by every particle update.
///
/// `position` is `None` until the first pointer event fires; absent
/// coordinates mean "no interaction", not an error.
#[derive(Debug, Clone)]
pub struct Pointer {
    pub position: Option<NVec2>, // absolute surface coordinates
    pub radius: f64, // interaction distance threshold
}

impl Pointer {
    pub fn idle(radius: f64) -> Self {
        Self { position: None, radius }
    }
}
