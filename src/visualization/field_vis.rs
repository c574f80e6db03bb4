use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResized;

use crate::simulation::field;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Component tagging each circle with its index into Scenario.field.particles
#[derive(Component)]
struct ParticleIndex(pub usize);

pub fn run_field(scenario: Scenario) {
    println!(
        "run_field: starting Bevy 2D viewer with {} particles",
        scenario.field.particles.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_field_system)
        .add_systems(
            Update,
            (
                track_pointer_system,
                handle_resize_system,
                field_step_system,
                sync_transforms_system,
            ),
        )
        .run();
}

/// Surface coordinates (top-left origin, y down) -> Bevy world coordinates
/// (centered origin, y up)
fn surface_to_world(x: NVec2, width: f64, height: f64) -> Vec3 {
    Vec3::new(
        (x.x - width / 2.0) as f32,
        (height / 2.0 - x.y) as f32,
        0.0,
    )
}

fn spawn_particles(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    scenario: &Scenario,
) {
    for (i, p) in scenario.field.particles.iter().enumerate() {
        let color = Color::srgba(p.color.r, p.color.g, p.color.b, p.color.a);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(p.size as f32))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_translation(surface_to_world(
                    p.x,
                    scenario.field.width,
                    scenario.field.height,
                )),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn setup_field_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera on a dark backdrop, like the hero section the field sits over
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.04, 0.04, 0.09)),
            ..Default::default()
        },
        ..Default::default()
    });

    spawn_particles(&mut commands, &mut meshes, &mut materials, &scenario);
}

/// Mirror the window cursor into the scenario's pointer snapshot. The last
/// known position is kept while the cursor is outside the window, matching
/// the page's "latest mousemove wins" contract.
fn track_pointer_system(windows: Query<&Window>, mut scenario: ResMut<Scenario>) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        // bevy cursor coordinates are already top-left origin, y down
        scenario.pointer.position = Some(NVec2::new(cursor.x as f64, cursor.y as f64));
    }
}

/// Per-frame stepping: reflection, pointer repulsion, drift
fn field_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        params,
        field,
        pointer,
        ..
    } = &mut *scenario;

    field::step(field, pointer, params);
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&ParticleIndex, &mut Transform)>) {
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = scenario.field.particles.get(*i) {
            transform.translation = surface_to_world(p.x, scenario.field.width, scenario.field.height);
        }
    }
}

/// On window resize: adopt the new dimensions, regenerate the whole
/// population, and rebuild the circle entities to match. Old particles are
/// discarded, never repositioned.
fn handle_resize_system(
    mut resize_events: EventReader<WindowResized>,
    mut commands: Commands,
    mut scenario: ResMut<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    existing: Query<Entity, With<ParticleIndex>>,
) {
    let Some(resized) = resize_events.read().last() else {
        return;
    };

    scenario.regenerate(resized.width as f64, resized.height as f64);

    for entity in &existing {
        commands.entity(entity).despawn();
    }
    spawn_particles(&mut commands, &mut meshes, &mut materials, &scenario);
}
