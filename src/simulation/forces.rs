//! Gravitational velocity kicks for the n-body engine
//!
//! Direct O(n^2) Newtonian gravity. Each body's contributions are already
//! multiplied by the time step while they are summed, so the result is the
//! velocity increment for one step rather than an acceleration. The running
//! sum is capped at `max_force` after every pair.

use log::trace;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3};

/// Newtonian gravity with a per-pair clamp on the accumulated kick
#[derive(Debug, Clone, Copy)]
pub struct ClampedGravity {
    pub g: f64, // gravitational constant
    pub time_step: f64, // folded into every pairwise term
    pub max_force: f64, // cap on |kick|, re-checked after each pair
}

impl ClampedGravity {
    pub fn from_parameters(p: &Parameters) -> Self {
        Self {
            g: p.g,
            time_step: p.time_step,
            max_force: p.max_force,
        }
    }

    /// Velocity increment for `bodies[i]` from every other body
    ///
    /// Other bodies are visited in slice order. Identity is the index, so two
    /// bodies with identical state still attract each other (unless they sit
    /// on the same point, in which case the pair is skipped).
    pub fn kick_on(&self, i: usize, bodies: &[Body]) -> NVec3 {
        let current = &bodies[i];
        let xi = current.position();

        let mut force = NVec3::zeros();

        for (j, other) in bodies.iter().enumerate() {
            if j == i {
                continue;
            }
            let xj = other.position();

            // Separation from other to current
            let r = xi - xj;
            let radius = r.norm();

            // Coincident bodies have no defined direction: no contribution
            if radius == 0.0 {
                trace!("bodies {i} and {j} coincide, skipping pair");
                continue;
            }

            // Unit vector pointing from current toward other
            let r_hat = (xj - xi) / radius;

            // |a| = G * m_j / r^2
            let force_norm = self.g * other.mass() / (radius * radius);

            force += r_hat * force_norm * self.time_step;

            // Cap after every pair, keeping the current direction
            let norm = force.norm();
            if norm > self.max_force {
                force /= norm;
                force *= self.max_force;
            }
        }

        force
    }

    /// Compute the kick for every body into `out`
    /// - `out[i]` is overwritten with the kick for `bodies[i]`
    pub fn accumulate_kicks(&self, bodies: &[Body], out: &mut [NVec3]) {
        for (i, kick) in out.iter_mut().enumerate().take(bodies.len()) {
            *kick = self.kick_on(i, bodies);
        }
    }
}
