//! Text reporting of body state through the `log` facade

use log::info;

use crate::simulation::simulator::Simulator;

/// Log name, position and velocity of every body under a `stage` heading
pub fn print_bodies(stage: &str, sim: &Simulator) {
    info!("{} state at t = {:.2} yr ({} steps)", stage, sim.display_time(), sim.steps());
    for b in sim.bodies() {
        let x = b.position();
        let v = b.velocity();
        info!("body: {}", b.name());
        info!("  mass:     {:e} M_sun", b.mass());
        info!("  position: [{:.4}, {:.4}, {:.4}] AU", x.x, x.y, x.z);
        info!("  velocity: [{:.4}, {:.4}, {:.4}] AU/yr", v.x, v.y, v.z);
    }
}
