use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::TrackBody;

/// Component tagging each circle with its body index into the controller
#[derive(Component)]
struct BodyIndex(pub usize);

/// World-space scaling: screen pixels per track meter
const SCALE: f32 = 3.0;

/// Vertical distance between lanes
const LANE_SPACING: f32 = 80.0;

/// Screen radius of a body circle
const BODY_RADIUS: f32 = 12.0;

/// Screen radius of one trail sample
const TRAIL_RADIUS: f32 = 3.0;

pub fn run_track(scenario: Scenario) {
    println!("run_track: starting Bevy viewer with {} bodies (space = start/pause, R = reset)",
        scenario.controller.bodies().len());

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (control_input_system, physics_step_system, sync_transforms_system, draw_track_system).chain(),
        )
        .run();
}

/// Track position (m) -> screen x, with the track centered on the origin
fn track_x(position: f64, track_length: f64) -> f32 {
    (position as f32 - track_length as f32 * 0.5) * SCALE
}

/// Lane index -> screen y, lanes spread around the vertical center
fn lane_y(index: usize, count: usize) -> f32 {
    (index as f32 - (count as f32 - 1.0) * 0.5) * -LANE_SPACING
}

fn body_color(body: &TrackBody) -> Color {
    Color::hex(&body.color).unwrap_or(Color::WHITE)
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let bodies = scenario.controller.bodies();
    let track_length = scenario.controller.globals().track_length;

    for (i, body) in bodies.iter().enumerate() {
        let x = track_x(body.position, track_length);
        let y = lane_y(i, bodies.len());

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(BODY_RADIUS))),
                material: materials.add(ColorMaterial::from(body_color(body))),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Space toggles start/pause/restart, R resets to idle
fn control_input_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    if keys.just_pressed(KeyCode::Space) {
        scenario.controller.toggle();
    }
    if keys.just_pressed(KeyCode::KeyR) {
        scenario.controller.reset();
    }
}

/// One controller tick per frame, fed with Bevy's elapsed wall-clock in ms
fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    scenario.controller.tick(time.elapsed_seconds_f64() * 1000.0);
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let track_length = scenario.controller.globals().track_length;
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(body) = scenario.controller.bodies().get(*i) {
            transform.translation.x = track_x(body.position, track_length);
        }
    }
}

/// Immediate-mode drawing of lanes, the finish line, and fading trails
fn draw_track_system(mut gizmos: Gizmos, scenario: Res<Scenario>) {
    let bodies = scenario.controller.bodies();
    let track_length = scenario.controller.globals().track_length;

    let x0 = track_x(0.0, track_length);
    let x1 = track_x(track_length, track_length);

    for (i, body) in bodies.iter().enumerate() {
        let y = lane_y(i, bodies.len());
        gizmos.line_2d(Vec2::new(x0, y), Vec2::new(x1, y), Color::DARK_GRAY);

        let color = body_color(body);
        for point in &body.trail {
            let pos = Vec2::new(track_x(point.position, track_length), y);
            gizmos.circle_2d(pos, TRAIL_RADIUS, color.with_a(point.opacity as f32));
        }
    }

    // Finish line across all lanes
    let y_top = lane_y(0, bodies.len()) + LANE_SPACING * 0.5;
    let y_bot = lane_y(bodies.len().saturating_sub(1), bodies.len()) - LANE_SPACING * 0.5;
    gizmos.line_2d(Vec2::new(x1, y_top), Vec2::new(x1, y_bot), Color::WHITE);
}
