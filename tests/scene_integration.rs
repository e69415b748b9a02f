//! Scene construction integration tests.
//!
//! Builds the scene headlessly and checks what was spawned.

mod common;

use approx::assert_relative_eq;
use bevy::prelude::*;
use orrery::registry::{AttachmentKind, BODIES, BodyCatalog, BodyDescriptor};
use orrery::render::background::BackgroundStar;
use orrery::ui::ControlPanel;
use orrery::types::{OrbitPath, OrbitingBody, PlanetRing, Satellite, Sun};

use common::{body_named, scene_app, translation};

fn count<C: Component>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, With<C>>();
    query.iter(app.world()).count()
}

/// Two plain planets: no ring, no satellite.
static PLAIN: [BodyDescriptor; 2] = [
    BodyDescriptor {
        name: "Inner",
        radius: 0.3,
        orbit_distance: 5.0,
        base_speed: 0.01,
        texture: "textures/mars.jpg",
        attachment: AttachmentKind::None,
    },
    BodyDescriptor {
        name: "Outer",
        radius: 0.5,
        orbit_distance: 9.0,
        base_speed: 0.002,
        texture: "textures/neptune.jpg",
        attachment: AttachmentKind::None,
    },
];

#[test]
fn test_one_body_and_orbit_path_per_descriptor() {
    let mut app = scene_app(BodyCatalog::default());
    app.update();

    assert_eq!(count::<OrbitingBody>(&mut app), BODIES.len());
    assert_eq!(count::<OrbitPath>(&mut app), BODIES.len());
    assert_eq!(count::<Sun>(&mut app), 1);
}

#[test]
fn test_starfield_count_and_bounds() {
    let mut app = scene_app(BodyCatalog::default());
    app.update();

    let mut query = app
        .world_mut()
        .query_filtered::<&Transform, With<BackgroundStar>>();
    let stars: Vec<Vec3> = query.iter(app.world()).map(|t| t.translation).collect();

    assert_eq!(stars.len(), 1000);
    assert!(stars.iter().all(|s| s.abs().max_element() <= 300.0));
}

#[test]
fn test_bodies_keep_registry_index_and_speed() {
    let mut app = scene_app(BodyCatalog::default());
    app.update();

    let mut query = app.world_mut().query::<&OrbitingBody>();
    let mut bodies: Vec<OrbitingBody> = query.iter(app.world()).cloned().collect();
    bodies.sort_by_key(|b| b.index);

    for (body, descriptor) in bodies.iter().zip(BODIES.iter()) {
        assert_eq!(body.name(), descriptor.name);
        assert_eq!(body.speed, descriptor.base_speed);
    }
}

#[test]
fn test_ring_is_child_of_saturn() {
    let mut app = scene_app(BodyCatalog::default());
    app.update();

    let saturn = body_named(&mut app, "Saturn");
    let mut query = app
        .world_mut()
        .query_filtered::<&ChildOf, With<PlanetRing>>();
    let parents: Vec<Entity> = query.iter(app.world()).map(|c| c.parent()).collect();

    assert_eq!(parents, [saturn]);
}

#[test]
fn test_satellite_owned_by_earth_and_offset_from_it() {
    let mut app = scene_app(BodyCatalog::default());
    for _ in 0..30 {
        app.update();
    }

    let earth = body_named(&mut app, "Earth");
    let mut query = app.world_mut().query::<(&Satellite, &Transform)>();
    let satellites: Vec<(Satellite, Vec3)> = query
        .iter(app.world())
        .map(|(s, t)| (s.clone(), t.translation))
        .collect();

    assert_eq!(satellites.len(), 1);
    let (satellite, moon) = &satellites[0];
    assert_eq!(satellite.owner, earth);

    let owner = translation(&app, earth);
    assert_eq!(moon.y, owner.y);
    let planar = Vec2::new(moon.x - owner.x, moon.z - owner.z).length();
    assert_relative_eq!(planar, 0.8, epsilon = 1e-4);
}

#[test]
fn test_missing_attachment_bodies_are_skipped() {
    let mut app = scene_app(BodyCatalog(&PLAIN));
    app.update();

    assert_eq!(count::<OrbitingBody>(&mut app), 2);
    assert_eq!(count::<OrbitPath>(&mut app), 2);
    assert_eq!(count::<PlanetRing>(&mut app), 0);
    assert_eq!(count::<Satellite>(&mut app), 0);
}

#[test]
fn test_control_panel_binds_each_body_entity() {
    let mut app = scene_app(BodyCatalog::default());
    app.update();

    let panel = app.world().resource::<ControlPanel>().clone();
    assert_eq!(panel.controls.len(), BODIES.len());

    for (control, descriptor) in panel.controls.iter().zip(BODIES.iter()) {
        assert_eq!(control.label, descriptor.name);
        let body = app.world().get::<OrbitingBody>(control.entity).unwrap();
        assert_eq!(body.name(), descriptor.name);
        assert_eq!(control.initial, descriptor.base_speed);
    }
}

#[test]
fn test_body_positions_after_startup_follow_orbit() {
    let mut app = scene_app(BodyCatalog::default());
    for _ in 0..10 {
        app.update();
    }

    let mut query = app.world_mut().query::<(&OrbitingBody, &Transform)>();
    for (body, transform) in query.iter(app.world()) {
        let p = transform.translation;
        let expected = body.descriptor.base_speed * 10.0;
        assert_relative_eq!(body.angle, expected, epsilon = 1e-5);
        assert_relative_eq!(p.x, body.angle.cos() * body.orbit_distance(), epsilon = 1e-4);
        assert_relative_eq!(p.z, body.angle.sin() * body.orbit_distance(), epsilon = 1e-4);
        assert_eq!(p.y, 0.0);
    }
}
