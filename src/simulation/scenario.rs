//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - the simulator with its bodies at t = 0 and its `Parameters`
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! stepping and drawing systems, or driven directly in headless runs

use bevy::prelude::Resource;
use log::info;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::presets::build_arrangement;
use crate::simulation::simulator::Simulator;

/// Bevy resource representing a fully-initialized simulation scenario
///
/// Only the step system takes it mutably; everything that draws reads it.
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub simulator: Simulator,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Engine (runtime) from EngineConfig
        let e_cfg = &cfg.engine;
        let engine = Engine {
            dimension: e_cfg.dimension,
            mode: e_cfg.mode,
            total_steps: e_cfg.total_steps,
            trail: e_cfg.trail,
            trail_length: e_cfg.trail_length(),
            labels: e_cfg.labels,
            scale: e_cfg.scale(),
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            time_step: p_cfg.time_step,
            g: p_cfg.g(),
            max_force: p_cfg.max_force,
        };

        // Bodies: 2D scenarios keep random bodies in the xy plane
        let bodies = build_arrangement(&cfg.arrangement, !engine.dimension);

        info!(
            "built scenario: {} bodies, dt = {} yr, G = {:.4}, max_force = {}",
            bodies.len(),
            parameters.time_step,
            parameters.g,
            parameters.max_force
        );

        Self {
            engine,
            simulator: Simulator::new(bodies, parameters),
        }
    }

    /// Run the configured number of steps without drawing
    pub fn run_batch(&mut self) {
        info!("running {} steps", self.engine.total_steps);
        self.simulator.run(self.engine.total_steps);
    }
}
