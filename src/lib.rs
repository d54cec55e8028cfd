pub mod animal;
pub mod config;
pub mod engine;
pub mod geo;
pub mod landscape;
pub mod rng;

pub use animal::{AgentId, Animal, AnimalError, AnimalSpec, Species};
pub use config::AnimalConfig;
pub use engine::{Engine, EngineBuilder, EngineSettings, TickSummary};
pub use geo::Position;
pub use landscape::Landscape;
