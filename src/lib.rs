pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod widgets;

pub use simulation::states::{Particle, Field, Pointer, Rgba, NVec2};
pub use simulation::params::Params;
pub use simulation::field::{populate, update_particle, step, resize};
pub use simulation::engine::{Canvas, FrameScheduler, FrameBudget, frame, animate};
pub use simulation::scenario::{Scenario, scenario_rng};

pub use configuration::config::{ScenarioConfig, SurfaceConfig, FieldConfig};

pub use visualization::field_vis::run_field;

pub use benchmark::benchmark::bench_step;
