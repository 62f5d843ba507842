pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, NVec3};
pub use simulation::params::{Parameters, G_SOLAR};
pub use simulation::numeric::linear_map;
pub use simulation::forces::ClampedGravity;
pub use simulation::integrator::euler_step;
pub use simulation::simulator::Simulator;
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ArrangementConfig, ScenarioConfig, RenderModeConfig, TrailConfig};

pub use visualization::{nbsim_vis2d::run_2d, nbsim_vis3d::run_3d, report::print_bodies};
