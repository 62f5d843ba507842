//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]      – viewer options (dimension, live/batch, trails)
//! - [`ParametersConfig`]  – step size, gravitational constant, force cap
//! - [`ArrangementConfig`] – which preset builds the initial bodies
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   dimension: true         # false -> 2D, true -> 3D
//!   mode: "live"            # or "batch"
//!   total_steps: 250        # steps run before drawing in batch mode
//!   trail: "full"           # or "last"
//!   trail_length: 10        # history entries drawn with "last"
//!   labels: true            # draw body names
//!
//! parameters:
//!   time_step: 0.01         # years
//!   max_force: 10.0         # cap on the per-step velocity kick
//!   # G defaults to 4 pi^2 (AU, solar masses, years)
//!
//! arrangement:
//!   kind: "solar"           # solar | random | three | testing | custom
//!   extra_velocity: [0.0, 0.0, 0.5]
//!   black_hole: false
//! ```
//!
//! The engine then maps this configuration into its runtime scenario
//! representation (see `simulation::scenario`).

use anyhow::{ensure, Result};
use serde::Deserialize;

use crate::simulation::params::{G_SOLAR, DEFAULT_MAX_FORCE, DEFAULT_TIME_STEP};

const DEFAULT_TOTAL_STEPS: usize = 250;
const DEFAULT_TRAIL_LENGTH: usize = 10;
const DEFAULT_SCALE: f32 = 100.0;

/// How the viewer drives the simulator
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderModeConfig {
    #[default]
    #[serde(rename = "live")] // One step per rendered frame
    Live,

    #[serde(rename = "batch")] // All steps up front, then draw the finished trajectories
    Batch,
}

/// How much of each body's history is drawn
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailConfig {
    #[default]
    #[serde(rename = "full")] // Entire trajectory
    Full,

    #[serde(rename = "last")] // Only the most recent `trail_length` positions
    Last,
}

/// High-level engine configuration
/// Controls how the scenario is run and drawn
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default = "default_dimension")]
    pub dimension: bool, // `false` - 2D view, `true` - 3D view
    #[serde(default)]
    pub mode: RenderModeConfig,
    #[serde(default = "default_total_steps")]
    pub total_steps: usize,
    #[serde(default)]
    pub trail: TrailConfig,
    pub trail_length: Option<usize>,
    #[serde(default)]
    pub labels: bool,
    pub scale: Option<f32>, // world units per AU
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            mode: RenderModeConfig::default(),
            total_steps: DEFAULT_TOTAL_STEPS,
            trail: TrailConfig::default(),
            trail_length: None,
            labels: false,
            scale: None,
        }
    }
}

impl EngineConfig {
    pub fn trail_length(&self) -> usize {
        self.trail_length.unwrap_or(DEFAULT_TRAIL_LENGTH)
    }

    pub fn scale(&self) -> f32 {
        self.scale.unwrap_or(DEFAULT_SCALE)
    }
}

fn default_dimension() -> bool {
    true
}

fn default_total_steps() -> usize {
    DEFAULT_TOTAL_STEPS
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_time_step")]
    pub time_step: f64, // years per step
    #[serde(rename = "G")]
    pub g: Option<f64>, // gravitational constant, 4 pi^2 when absent
    #[serde(default = "default_max_force")]
    pub max_force: f64, // keeps close encounters from flinging bodies away
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            g: None,
            max_force: DEFAULT_MAX_FORCE,
        }
    }
}

impl ParametersConfig {
    pub fn g(&self) -> f64 {
        self.g.unwrap_or(G_SOLAR)
    }
}

fn default_time_step() -> f64 {
    DEFAULT_TIME_STEP
}

fn default_max_force() -> f64 {
    DEFAULT_MAX_FORCE
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub m: f64, // mass in solar masses
    pub x: [f64; 3], // initial position (AU)
    pub v: [f64; 3], // initial velocity (AU / yr)
}

/// Named initial arrangements, selected with `kind:`
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ArrangementConfig {
    /// Sun and inner planets, optionally the outer planets and a black hole
    Solar {
        #[serde(default)]
        extra_velocity: [f64; 3], // added to every body once at setup
        #[serde(default)]
        black_hole: bool,
        #[serde(default)]
        outer_planets: bool,
    },
    /// `n` bodies with uniformly random mass, position and velocity
    Random {
        n: usize,
        mass_range: [f64; 2], // [min, max]
        pos_range: [f64; 3], // +- per axis
        vel_range: [f64; 3], // +- per axis
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Three equal masses on the unit circle
    Three,
    /// Small fixed layout used while developing
    Testing,
    /// Explicit list of bodies
    Custom {
        bodies: Vec<BodyConfig>,
    },
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub arrangement: ArrangementConfig,
}

impl ScenarioConfig {
    /// Reject settings the simulator cannot run with
    pub fn validate(&self) -> Result<()> {
        let p = &self.parameters;
        ensure!(p.time_step > 0.0 && p.time_step.is_finite(), "time_step must be positive, got {}", p.time_step);
        ensure!(p.max_force > 0.0 && p.max_force.is_finite(), "max_force must be positive, got {}", p.max_force);

        match &self.arrangement {
            ArrangementConfig::Random { n, mass_range, pos_range, vel_range, .. } => {
                ensure!(*n > 0, "random arrangement needs at least one body");
                ensure!(
                    mass_range[0] > 0.0 && mass_range[0] <= mass_range[1],
                    "mass_range must satisfy 0 < min <= max, got {:?}",
                    mass_range
                );
                ensure!(
                    sample_span_ok(mass_range[0], mass_range[1]),
                    "mass_range must be finite, got {:?}",
                    mass_range
                );
                ensure!(symmetric_range_ok(pos_range), "pos_range must be finite and non-negative, got {:?}", pos_range);
                ensure!(symmetric_range_ok(vel_range), "vel_range must be finite and non-negative, got {:?}", vel_range);
            }
            ArrangementConfig::Custom { bodies } => {
                ensure!(!bodies.is_empty(), "custom arrangement needs at least one body");
                for b in bodies {
                    ensure!(b.m > 0.0, "body {} has non-positive mass {}", b.name, b.m);
                }
            }
            _ => {}
        }

        Ok(())
    }
}

/// Uniform float sampling divides the span by a factor just below one, so
/// keep a factor of two of headroom below `f64::MAX`
fn sample_span_ok(low: f64, high: f64) -> bool {
    (2.0 * (high - low)).is_finite()
}

/// Bounds sampled as `-r..=r`
fn symmetric_range_ok(range: &[f64; 3]) -> bool {
    range.iter().all(|r| *r >= 0.0 && sample_span_ok(-r, *r))
}
