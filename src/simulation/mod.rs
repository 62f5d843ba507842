pub mod states;
pub mod params;
pub mod numeric;
pub mod forces;
pub mod integrator;
pub mod simulator;
pub mod presets;
pub mod engine;
pub mod scenario;
