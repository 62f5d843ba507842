use bevy::math::primitives::{Cuboid, Sphere};
use bevy::prelude::*;
use log::info;

use super::{body_color, marker_radius, physics_step_system, update_title_system, viewer_plugins, window_title, world_position};
use crate::simulation::scenario::Scenario;

/// Component tagging each sphere with its body index into the simulator's bodies
#[derive(Component)]
struct BodyIndex3(pub usize);

/// Screen-space name tag for a body, placed over its projected position
#[derive(Component)]
pub struct BodyLabel3(pub usize);

/// Screen-space gap between a body and its name, in logical pixels
const LABEL_OFFSET: f32 = 14.0;
const LABEL_FONT_SIZE: f32 = 14.0;

/// Camera distance from the origin, in AU
const CAMERA_DISTANCE_AU: f32 = 6.0;

/// Half-length of the reference axes, in AU
const AXIS_HALF_LEN_AU: f32 = 5.0;

/// Open the 3D viewer
///
/// In batch mode every step runs before the window opens and the viewer
/// only draws the finished trajectories.
pub fn run_3d(mut scenario: Scenario) {
    if !scenario.engine.is_live() {
        scenario.run_batch();
    }
    let live = scenario.engine.is_live();

    info!("run_3d: starting Bevy 3D viewer with {} bodies", scenario.simulator.bodies().len());

    let title = window_title(&scenario);
    let mut app = App::new();
    app.insert_resource(scenario)
        .add_plugins(viewer_plugins(title))
        .add_systems(Startup, (setup_3d, spawn_labels_3d));

    let draw = (sync_transforms_3d, sync_labels_3d, draw_trails_3d, update_title_system);
    if live {
        app.add_systems(Update, (physics_step_system, draw).chain());
    } else {
        app.add_systems(Update, draw);
    }

    app.run();
}

/// Startup system: spawn camera, axes, and one sphere per body
fn setup_3d(mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    let scale = scenario.engine.scale;
    let distance = CAMERA_DISTANCE_AU * scale;

    // Camera above the ecliptic, looking at the origin with +z up
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)), // pure black
            ..Default::default()
        },
        transform: Transform::from_xyz(0.3 * distance, -distance, 0.6 * distance)
            .looking_at(Vec3::ZERO, Vec3::Z),
        ..Default::default()
    });

    spawn_axes(&mut commands, &mut meshes, &mut materials, scale);

    let bodies = scenario.simulator.bodies();
    for (i, b) in bodies.iter().enumerate() {
        let radius_world = marker_radius(b.display_size(), scale);

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(radius_world).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: body_color(i, bodies.len()),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_translation(world_position(b.position(), scale)),
                ..Default::default()
            },
            BodyIndex3(i),
        ));
    }
}

fn sync_transforms_3d(
    scenario: Res<Scenario>,
    mut query: Query<(&BodyIndex3, &mut Transform)>,
) {
    let scale = scenario.engine.scale;
    for (BodyIndex3(i), mut transform) in &mut query {
        if let Some(b) = scenario.simulator.bodies().get(*i) {
            transform.translation = world_position(b.position(), scale);
        }
    }
}

/// Startup system: one UI text node per body when `engine.labels` is set
pub fn spawn_labels_3d(mut commands: Commands, scenario: Res<Scenario>) {
    if !scenario.engine.labels {
        return;
    }

    for (i, b) in scenario.simulator.bodies().iter().enumerate() {
        commands.spawn((
            TextBundle::from_section(
                b.name(),
                TextStyle {
                    font_size: LABEL_FONT_SIZE,
                    color: Color::WHITE,
                    ..Default::default()
                },
            )
            .with_style(Style {
                position_type: PositionType::Absolute,
                ..Default::default()
            }),
            BodyLabel3(i),
        ));
    }
}

/// Move each label to its body's viewport position, hiding it when the body
/// is behind the camera
fn sync_labels_3d(
    scenario: Res<Scenario>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut labels: Query<(&BodyLabel3, &mut Style, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let scale = scenario.engine.scale;

    for (BodyLabel3(i), mut style, mut visibility) in &mut labels {
        let Some(b) = scenario.simulator.bodies().get(*i) else {
            continue;
        };

        match camera.world_to_viewport(camera_transform, world_position(b.position(), scale)) {
            Some(screen) => {
                style.left = Val::Px(screen.x + LABEL_OFFSET);
                style.top = Val::Px(screen.y - LABEL_OFFSET);
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

fn draw_trails_3d(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let engine = &scenario.engine;
    let bodies = scenario.simulator.bodies();

    for (i, b) in bodies.iter().enumerate() {
        let points = engine
            .trail_slice(b.history())
            .iter()
            .copied()
            .chain(std::iter::once(b.position()))
            .map(|x| world_position(x, engine.scale));

        gizmos.linestrip(points, body_color(i, bodies.len()));
    }
}

// =========================================================================================
// Draw 3D axes for visual reference
// =========================================================================================

fn spawn_axes(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>, scale: f32) {
    // Axis length and thickness, in world units
    let axis_len = 2.0 * AXIS_HALF_LEN_AU * scale;
    let axis_thickness = 0.005 * scale;

    let axes = [
        (Cuboid::new(axis_len, axis_thickness, axis_thickness), Color::srgb(0.5, 0.1, 0.1)), // x
        (Cuboid::new(axis_thickness, axis_len, axis_thickness), Color::srgb(0.1, 0.5, 0.1)), // y
        (Cuboid::new(axis_thickness, axis_thickness, axis_len), Color::srgb(0.1, 0.1, 0.5)), // z
    ];

    // Cuboids are centered at their transform origin, so each crosses the world origin
    for (cuboid, color) in axes {
        commands.spawn(PbrBundle {
            mesh: meshes.add(cuboid.mesh()),
            material: materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..Default::default()
            }),
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..Default::default()
        });
    }
}
