//! Fixed-step semi-implicit Euler integrator
//!
//! Velocities are kicked first from the positions at the start of the step,
//! then every body drifts with its new velocity.

use super::forces::ClampedGravity;
use super::states::{Body, NVec3};

/// Advance `bodies` by one step of `dt`
///
/// `kicks` is scratch space reused between calls; it is resized to the
/// number of bodies.
pub fn euler_step(bodies: &mut [Body], gravity: &ClampedGravity, dt: f64, kicks: &mut Vec<NVec3>) {
    let n = bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    kicks.clear();
    kicks.resize(n, NVec3::zeros());

    // All kicks read the same pre-update positions
    gravity.accumulate_kicks(bodies, kicks);

    // Kick: v_n+1 = v_n + dv
    for (b, dv) in bodies.iter_mut().zip(kicks.iter()) {
        b.kick(*dv);
    }

    // Drift: x_n+1 = x_n + dt * v_n+1, logging x_n into the history
    for b in bodies.iter_mut() {
        let displacement = b.velocity() * dt;
        b.record_and_advance(displacement);
    }
}
