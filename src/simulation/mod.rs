pub mod states;
pub mod params;
pub mod field;
pub mod engine;
pub mod scenario;
