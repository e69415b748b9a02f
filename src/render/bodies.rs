//! Body spawning.
//!
//! Handles the meshes for the planets, the ring attachment and the
//! satellite attachment.

use bevy::prelude::*;

use crate::orbit::{orbit_position, satellite_position};
use crate::registry::{
    self, AttachmentKind, BodyCatalog, BodyDescriptor, MOON_TEXTURE, RING_TEXTURE,
};
use crate::render::SceneSettings;
use crate::types::{OrbitingBody, PlanetRing, Satellite};

/// Plugin providing body spawning functionality.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system);
    }
}

/// Spawn every catalogued body with its attachments.
///
/// Attachments follow each descriptor's [`AttachmentKind`]; a catalog
/// without a ring or satellite body simply gets none.
pub fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    settings: Res<SceneSettings>,
    catalog: Res<BodyCatalog>,
) {
    let descriptors = catalog.0;

    if let Err(err) = registry::validate(descriptors) {
        error!("Body registry is inconsistent: {err}");
    }

    for (index, descriptor) in descriptors.iter().enumerate() {
        let entity = commands
            .spawn((
                Mesh3d(meshes.add(Sphere::new(descriptor.radius).mesh().uv(32, 32))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color_texture: Some(asset_server.load(descriptor.texture)),
                    perceptual_roughness: 0.9,
                    ..default()
                })),
                Transform::from_translation(orbit_position(0.0, descriptor.orbit_distance)),
                OrbitingBody::new(index, descriptor),
                Name::new(descriptor.name),
            ))
            .id();

        match descriptor.attachment {
            AttachmentKind::None => {}
            AttachmentKind::Ring => spawn_ring(
                &mut commands,
                &mut meshes,
                &mut materials,
                &asset_server,
                &settings,
                entity,
                descriptor,
            ),
            AttachmentKind::Satellite => spawn_satellite(
                &mut commands,
                &mut meshes,
                &mut materials,
                &asset_server,
                &settings,
                entity,
                descriptor,
            ),
        }
    }

    info!("Spawned {} orbiting bodies", descriptors.len());
}

/// Flat textured ring, parented so it moves rigidly with the body.
fn spawn_ring(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    settings: &SceneSettings,
    owner: Entity,
    descriptor: &BodyDescriptor,
) {
    let ring = Annulus::new(
        descriptor.radius * settings.ring_inner_scale,
        descriptor.radius * settings.ring_outer_scale,
    );

    commands.entity(owner).with_child((
        Mesh3d(meshes.add(ring.mesh().resolution(64))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load(RING_TEXTURE)),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        // Annulus meshes face +Z; lay it flat in the orbital plane
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
        PlanetRing,
        Name::new(format!("{} ring", descriptor.name)),
    ));

    debug!("Attached ring to {}", descriptor.name);
}

/// Small moon that tracks the body without being parented to it.
fn spawn_satellite(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    settings: &SceneSettings,
    owner: Entity,
    descriptor: &BodyDescriptor,
) {
    let satellite = Satellite::new(owner, settings.moon_orbit_radius, settings.moon_rate);
    let start = satellite_position(
        orbit_position(0.0, descriptor.orbit_distance),
        satellite.angle,
        satellite.radius,
    );

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(settings.moon_radius).mesh().uv(16, 16))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load(MOON_TEXTURE)),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_translation(start),
        satellite,
        Name::new(format!("{} moon", descriptor.name)),
    ));

    debug!("Attached satellite to {}", descriptor.name);
}
