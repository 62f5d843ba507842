//! Core state types for the N-body simulation.
//!
//! A `Body` is a point mass with a position, a velocity and the trail of
//! positions it has passed through. Bodies never change mass and are never
//! added or removed once a `Simulator` owns them.

use nalgebra::Vector3;

use crate::simulation::numeric::linear_map;

pub type NVec3 = Vector3<f64>;

/// Mass range (solar masses) mapped onto the marker size range below
const DISPLAY_MASS_MIN: f64 = 0.0;
const DISPLAY_MASS_MAX: f64 = 20.0;
const DISPLAY_SIZE_MIN: f64 = 10.0;
const DISPLAY_SIZE_MAX: f64 = 75.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    mass: f64, // solar masses
    x: NVec3, // position (AU)
    v: NVec3, // velocity (AU / yr)
    history: Vec<NVec3>, // positions before each update, oldest first
    display_size: f64, // marker size, presentation only
}

impl Body {
    pub fn new(name: impl Into<String>, mass: f64, position: NVec3, velocity: NVec3) -> Self {
        Self {
            name: name.into(),
            mass,
            x: position,
            v: velocity,
            history: Vec::new(),
            display_size: linear_map(mass, DISPLAY_MASS_MIN, DISPLAY_MASS_MAX, DISPLAY_SIZE_MIN, DISPLAY_SIZE_MAX),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> NVec3 {
        self.x
    }

    pub fn velocity(&self) -> NVec3 {
        self.v
    }

    pub fn history(&self) -> &[NVec3] {
        &self.history
    }

    pub fn display_size(&self) -> f64 {
        self.display_size
    }

    /// Push the current position onto the history, then move by `displacement`
    pub fn record_and_advance(&mut self, displacement: NVec3) {
        self.history.push(self.x);
        self.x += displacement;
    }

    /// Add `dv` to the velocity
    pub(crate) fn kick(&mut self, dv: NVec3) {
        self.v += dv;
    }
}
