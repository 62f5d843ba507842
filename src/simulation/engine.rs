//! High-level runtime engine settings
//!
//! Selects dimension (2D/3D), how the viewer drives the simulator (live or
//! batch) and how trails are drawn when building and running a `Scenario`

use crate::configuration::config::{RenderModeConfig, TrailConfig};
use crate::simulation::states::NVec3;

#[derive(Debug, Clone)]
pub struct Engine {
    pub dimension: bool, // false = 2D, true = 3D
    pub mode: RenderModeConfig, // live or batch
    pub total_steps: usize, // steps run up front in batch mode
    pub trail: TrailConfig, // full or last
    pub trail_length: usize, // history entries drawn with `last`
    pub labels: bool, // draw body names (2D)
    pub scale: f32, // world units per AU
}

impl Engine {
    /// Part of `history` the viewer should draw as a trail
    pub fn trail_slice<'a>(&self, history: &'a [NVec3]) -> &'a [NVec3] {
        match self.trail {
            TrailConfig::Full => history,
            TrailConfig::Last => &history[history.len().saturating_sub(self.trail_length)..],
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.mode, RenderModeConfig::Live)
    }
}
