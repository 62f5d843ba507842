//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings the integrator reads every step:
//! - fixed step size in years,
//! - gravitational constant in AU^3 / (solar mass * yr^2),
//! - cap on the per-body velocity kick accumulated in one step

use std::f64::consts::PI;

/// G in AU^3 M_sun^-1 yr^-2
pub const G_SOLAR: f64 = 4.0 * PI * PI;

pub const DEFAULT_TIME_STEP: f64 = 0.01;
pub const DEFAULT_MAX_FORCE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub time_step: f64, // step size (yr)
    pub g: f64, // gravitational constant
    pub max_force: f64, // clamp on the accumulated kick
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            g: G_SOLAR,
            max_force: DEFAULT_MAX_FORCE,
        }
    }
}
