//! Bevy viewers and the text reporter
//!
//! Viewers only read the `Scenario` resource; the single step system in live
//! mode is the one place that takes it mutably.

pub mod nbsim_vis2d;
pub mod nbsim_vis3d;
pub mod report;

use bevy::app::PluginGroupBuilder;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec3;

/// Marker radius as a fraction of one AU per unit of sqrt(display_size)
const MARKER_FRACTION: f32 = 0.01;

/// Default plugins with our window title; `env_logger` owns logging, so
/// Bevy's tracing subscriber stays off
pub(crate) fn viewer_plugins(title: String) -> PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title,
                ..Default::default()
            }),
            ..Default::default()
        })
        .disable::<LogPlugin>()
}

/// AU -> world units
pub(crate) fn world_position(x: NVec3, scale: f32) -> Vec3 {
    Vec3::new(x.x as f32, x.y as f32, x.z as f32) * scale
}

pub(crate) fn marker_radius(display_size: f64, scale: f32) -> f32 {
    (display_size as f32).sqrt() * MARKER_FRACTION * scale
}

/// Evenly spaced hues so neighbouring bodies are easy to tell apart
pub(crate) fn body_color(i: usize, n: usize) -> Color {
    let hue = 360.0 * i as f32 / n.max(1) as f32;
    Color::hsl(hue, 0.8, 0.6)
}

pub(crate) fn window_title(scenario: &Scenario) -> String {
    format!("N-Body Simulation - t = {:.2} yr", scenario.simulator.display_time())
}

/// Keep the window title in sync with the simulation clock
pub(crate) fn update_title_system(
    scenario: Res<Scenario>,
    mut windows: Query<&mut Window, With<bevy::window::PrimaryWindow>>,
) {
    let title = window_title(&scenario);
    if let Ok(mut window) = windows.get_single_mut() {
        if window.title != title {
            window.title = title;
        }
    }
}

/// Live mode only: advance the simulation once per frame
pub(crate) fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.simulator.step();
}
