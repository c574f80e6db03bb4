//! Tunable parameters for the particle field
//!
//! `Params` holds the runtime knobs:
//! - population density (surface area per particle),
//! - pointer interaction radius and nudge step,
//! - far-edge margin factor that suppresses nudges near the boundary,
//! - spawn ranges for particle size and drift speed,
//! - optional seed to make population layout reproducible

#[derive(Debug, Clone)]
pub struct Params {
    pub density: f64, // surface area (px^2) per particle
    pub pointer_radius: f64, // interaction distance threshold
    pub nudge: f64, // per-axis push step while inside the pointer radius
    pub edge_factor: f64, // multiplied by size: margin where nudges are suppressed
    pub size_min: f64, // spawn radius lower bound, inclusive
    pub size_max: f64, // spawn radius upper bound, exclusive
    pub max_drift: f64, // per-axis drift sampled from [-max_drift, max_drift)
    pub seed: Option<u64>, // deterministic population layout when set
}

impl Default for Params {
    fn default() -> Self {
        Self {
            density: 9000.0,
            pointer_radius: 150.0,
            nudge: 5.0,
            edge_factor: 10.0,
            size_min: 1.0,
            size_max: 3.0,
            max_drift: 0.2,
            seed: None,
        }
    }
}
