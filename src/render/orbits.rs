//! Orbit path rendering.
//!
//! Each body gets a thin translucent annulus at its orbit distance. The
//! paths are purely decorative: they are never picked and never move.

use bevy::prelude::*;

use crate::registry::BodyCatalog;
use crate::render::SceneSettings;
use crate::types::OrbitPath;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_orbit_paths);
    }
}

/// Inner and outer radius of the path annulus for an orbit.
pub fn orbit_path_bounds(distance: f32, half_width: f32) -> (f32, f32) {
    ((distance - half_width).max(0.0), distance + half_width)
}

/// Spawn one flat annulus per catalogued body.
fn spawn_orbit_paths(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
    catalog: Res<BodyCatalog>,
) {
    // All paths share one material
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, settings.orbit_path_alpha),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    for descriptor in catalog.0 {
        let (inner, outer) =
            orbit_path_bounds(descriptor.orbit_distance, settings.orbit_path_half_width);

        commands.spawn((
            Mesh3d(meshes.add(Annulus::new(inner, outer).mesh().resolution(64))),
            MeshMaterial3d(material.clone()),
            Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
            OrbitPath,
        ));
    }
}
