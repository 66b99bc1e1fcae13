pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod input;
pub mod lighting;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod simulation;
pub mod traits;
pub mod types;

pub use config::SceneConfig;
pub use error::ConfigError;
pub use simulation::Simulation;
