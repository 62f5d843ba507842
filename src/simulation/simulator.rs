//! Owner of the body set and the running clock
//!
//! The `Simulator` is the only thing that mutates bodies. Viewers and the
//! reporter borrow `bodies()` between steps.

use log::trace;

use super::forces::ClampedGravity;
use super::integrator::euler_step;
use super::params::Parameters;
use super::states::{Body, NVec3};

#[derive(Debug, Clone)]
pub struct Simulator {
    bodies: Vec<Body>, // index order is the iteration order
    parameters: Parameters,
    t: f64, // elapsed time (yr)
    steps: usize, // completed steps
    kicks: Vec<NVec3>, // scratch buffer for euler_step
}

impl Simulator {
    pub fn new(bodies: Vec<Body>, parameters: Parameters) -> Self {
        let n = bodies.len();
        Self {
            bodies,
            parameters,
            t: 0.0,
            steps: 0,
            kicks: Vec::with_capacity(n),
        }
    }

    /// Advance every body by one `time_step`
    pub fn step(&mut self) {
        let dt = self.parameters.time_step;
        let gravity = ClampedGravity::from_parameters(&self.parameters);
        euler_step(&mut self.bodies, &gravity, dt, &mut self.kicks);

        self.t += dt;
        self.steps += 1;
        trace!("step {} done, t = {:.4} yr", self.steps, self.t);
    }

    /// Run `n` consecutive steps
    pub fn run(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Elapsed simulation time in years
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Elapsed time rounded to two decimals, for titles and reports
    pub fn display_time(&self) -> f64 {
        (self.t * 100.0).round() / 100.0
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}
