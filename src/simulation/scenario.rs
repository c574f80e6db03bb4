//! Build a fully-initialized particle-field scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - tunable parameters (`Params`)
//! - field state (`Field` with the initial population already spawned)
//! - pointer state (`Pointer`, idle until the first pointer event)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! stepping and visualization systems

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::field;
use crate::simulation::params::Params;
use crate::simulation::states::{Field, Pointer};

/// Population RNG: seeded and reproducible when the config asks for it,
/// thread-local entropy otherwise.
pub fn scenario_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(s) => Box::new(StdRng::seed_from_u64(s)),
        None => Box::new(rand::thread_rng()),
    }
}

/// Bevy resource representing a fully-initialized particle-field scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// parameters, the populated field, and the pointer snapshot the update
/// step reads every frame
#[derive(Resource)]
pub struct Scenario {
    pub params: Params,
    pub field: Field,
    pub pointer: Pointer,
}

impl Scenario {
    /// Build the runtime scenario, or `None` when the config carries no
    /// `surface` section — no drawable surface means the whole subsystem
    /// is skipped, not an error.
    pub fn build_scenario(cfg: ScenarioConfig) -> Option<Self> {
        let surface = cfg.surface?;

        let f_cfg = cfg.field;
        let params = Params {
            density: f_cfg.density,
            pointer_radius: f_cfg.pointer_radius,
            nudge: f_cfg.nudge,
            edge_factor: f_cfg.edge_factor,
            size_min: f_cfg.size_min,
            size_max: f_cfg.size_max,
            max_drift: f_cfg.max_drift,
            seed: f_cfg.seed,
        };

        // Initial population at the configured surface dimensions
        let mut rng = scenario_rng(params.seed);
        let particles = field::populate(surface.width, surface.height, &params, &mut *rng);

        let field = Field {
            particles,
            width: surface.width,
            height: surface.height,
        };

        let pointer = Pointer::idle(params.pointer_radius);

        Some(Self { params, field, pointer })
    }

    /// Apply new surface dimensions, discarding and respawning the whole
    /// population. Load and resize share this one code path.
    pub fn regenerate(&mut self, width: f64, height: f64) {
        let mut rng = scenario_rng(self.params.seed);
        field::resize(&mut self.field, width, height, &self.params, &mut *rng);
    }
}
