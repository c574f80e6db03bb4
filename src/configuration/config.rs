//! Configuration types for loading field scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! particle-field scenario. A scenario consists of:
//!
//! - [`SurfaceConfig`]  – drawable surface dimensions (optional: absent
//!   means the field subsystem is skipped entirely)
//! - [`FieldConfig`]    – population density, pointer interaction, spawn ranges
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! surface:
//!   width: 1280.0          # pixels; omit the whole section to disable the field
//!   height: 720.0
//!
//! field:
//!   density: 9000.0        # surface area (px^2) per particle
//!   pointer_radius: 150.0  # interaction distance threshold
//!   nudge: 5.0             # per-axis push step inside the pointer radius
//!   edge_factor: 10.0      # x size: far-edge margin that suppresses nudges
//!   size_min: 1.0          # spawn radius range [size_min, size_max)
//!   size_max: 3.0
//!   max_drift: 0.2         # per-axis drift range [-max_drift, max_drift)
//!   seed: 42               # optional; reproducible population layout
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;

/// Drawable surface dimensions in pixels
#[derive(Deserialize, Debug)]
pub struct SurfaceConfig {
    pub width: f64,  // surface width in pixels
    pub height: f64, // surface height in pixels
}

/// Field tunables for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct FieldConfig {
    pub density: f64,        // surface area per particle
    pub pointer_radius: f64, // interaction distance threshold
    pub nudge: f64,          // per-axis push step
    pub edge_factor: f64,    // far-edge margin factor (x particle size)
    pub size_min: f64,       // spawn radius lower bound, inclusive
    pub size_max: f64,       // spawn radius upper bound, exclusive
    pub max_drift: f64,      // per-axis drift magnitude bound
    pub seed: Option<u64>,   // deterministic seed to make layouts reproducible
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub surface: Option<SurfaceConfig>, // absent -> skip the field subsystem
    pub field: FieldConfig,             // population and interaction tunables
}
