use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use log::info;

use super::{body_color, marker_radius, physics_step_system, update_title_system, viewer_plugins, window_title, world_position};
use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct BodyLabel(pub usize);

/// Screen-space gap between a body and its name
const LABEL_OFFSET: f32 = 14.0;
const LABEL_FONT_SIZE: f32 = 14.0;

/// Open the 2D viewer (xy projection)
///
/// In batch mode every step runs before the window opens and the viewer
/// only draws the finished trajectories.
pub fn run_2d(mut scenario: Scenario) {
    if !scenario.engine.is_live() {
        scenario.run_batch();
    }
    let live = scenario.engine.is_live();

    info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.simulator.bodies().len());

    let title = window_title(&scenario);
    let mut app = App::new();
    app.insert_resource(scenario)
        .add_plugins(viewer_plugins(title))
        .add_systems(Startup, setup_bodies_system);

    let draw = (sync_transforms_system, draw_trails_system, update_title_system);
    if live {
        app.add_systems(Update, (physics_step_system, draw).chain());
    } else {
        app.add_systems(Update, draw);
    }

    app.run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let scale = scenario.engine.scale;
    let bodies = scenario.simulator.bodies();

    for (i, body) in bodies.iter().enumerate() {
        let radius_screen = marker_radius(body.display_size(), scale);
        let p = world_position(body.position(), scale);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(body_color(i, bodies.len()))),
                transform: Transform::from_xyz(p.x, p.y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        if scenario.engine.labels {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        body.name(),
                        TextStyle {
                            font_size: LABEL_FONT_SIZE,
                            color: Color::WHITE,
                            ..Default::default()
                        },
                    ),
                    transform: Transform::from_xyz(p.x, p.y + LABEL_OFFSET, 1.0),
                    ..Default::default()
                },
                BodyLabel(i),
            ));
        }
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut markers: Query<(&BodyIndex, &mut Transform), Without<BodyLabel>>,
    mut labels: Query<(&BodyLabel, &mut Transform), Without<BodyIndex>>,
) {
    let scale = scenario.engine.scale;
    let bodies = scenario.simulator.bodies();

    for (BodyIndex(i), mut transform) in &mut markers {
        if let Some(b) = bodies.get(*i) {
            let p = world_position(b.position(), scale);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }

    for (BodyLabel(i), mut transform) in &mut labels {
        if let Some(b) = bodies.get(*i) {
            let p = world_position(b.position(), scale);
            transform.translation.x = p.x;
            transform.translation.y = p.y + LABEL_OFFSET;
        }
    }
}

fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let engine = &scenario.engine;
    let bodies = scenario.simulator.bodies();

    for (i, b) in bodies.iter().enumerate() {
        let points = engine
            .trail_slice(b.history())
            .iter()
            .copied()
            .chain(std::iter::once(b.position()))
            .map(|x| world_position(x, engine.scale).truncate());

        gizmos.linestrip_2d(points, body_color(i, bodies.len()));
    }
}
