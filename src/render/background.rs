//! Background elements for the orrery.
//!
//! Provides the starfield, the sun and the scene lighting.

use bevy::prelude::*;
use rand::Rng;

use crate::registry::{SUN_RADIUS, SUN_TEXTURE};
use crate::render::SceneSettings;
use crate::types::Sun;

/// Marker for a background star.
#[derive(Component)]
pub struct BackgroundStar;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_sun, spawn_lighting));
    }
}

/// Uniformly scattered points inside a cube of edge `spread` centered at the origin.
pub fn star_positions(rng: &mut impl Rng, count: usize, spread: f32) -> Vec<Vec3> {
    let half = spread / 2.0;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-half..half),
                rng.random_range(-half..half),
                rng.random_range(-half..half),
            )
        })
        .collect()
}

/// Spawn a starfield background with randomly placed stars.
///
/// Generated once; stars never move.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
) {
    // Material for stars - emissive white
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });

    // Small sphere mesh for stars
    let star_mesh = meshes.add(Sphere::new(settings.star_size).mesh().uv(8, 6));

    let mut rng = rand::rng();
    let positions = star_positions(&mut rng, settings.star_count, settings.star_spread);

    commands.spawn_batch(positions.into_iter().map(move |pos| {
        (
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(pos),
            BackgroundStar,
        )
    }));

    info!("Spawned {} background stars", settings.star_count);
}

/// Spawn the sun at the origin.
fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(32, 32))),
        // Sun is unlit so it reads as the light source
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load(SUN_TEXTURE)),
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        Sun,
        Name::new("Sun"),
    ));
}

/// Spawn the point light at the sun.
///
/// Ambient fill rides on the camera (see `camera::setup_camera`).
fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        PointLight {
            intensity: 1.5e7,
            range: 100.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::IDENTITY,
    ));

    info!("Scene lighting initialized");
}
