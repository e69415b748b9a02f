//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use bevy::window::PrimaryWindow;
use orrery::animation::{AdvanceOrbitsSet, AnimationPlugin};
use orrery::camera::{CameraFocus, MainCamera, ViewportSize, handle_resize, projection};
use orrery::input::{PointerOverUi, fly_to_clicked};
use orrery::orbit::orbit_position;
use orrery::registry::{BODIES, BodyCatalog};
use orrery::render::highlight::detect_hover;
use orrery::render::{
    BackgroundPlugin, CelestialBodyPlugin, HoveredBody, OrbitPathPlugin, PointerState,
    SceneSettings,
};
use orrery::types::{OrbitingBody, PlayState, Satellite};
use orrery::ui::controls::setup_control_panel;

/// Headless app with orbital animation only.
pub fn animation_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AnimationPlugin));
    app
}

/// Headless app that builds the full scene and control panel at startup.
///
/// Textures are requested but never load; no loader is registered.
pub fn scene_app(catalog: BodyCatalog) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()))
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .init_asset::<Image>()
        .init_resource::<SceneSettings>()
        .insert_resource(catalog)
        .add_plugins((
            CelestialBodyPlugin,
            OrbitPathPlugin,
            BackgroundPlugin,
            AnimationPlugin,
        ))
        .add_systems(
            Startup,
            setup_control_panel.after(orrery::render::spawn_solar_system),
        );
    app
}

/// Spawn a body from the registry at `angle` with `speed`.
pub fn spawn_body(app: &mut App, index: usize, angle: f32, speed: f32) -> Entity {
    let descriptor = &BODIES[index];
    let mut body = OrbitingBody::new(index, descriptor);
    body.angle = angle;
    body.speed = speed;

    app.world_mut()
        .spawn((
            Transform::from_translation(orbit_position(angle, descriptor.orbit_distance)),
            body,
        ))
        .id()
}

/// Spawn a satellite around `owner`.
pub fn spawn_satellite(app: &mut App, owner: Entity, radius: f32, rate: f32) -> Entity {
    app.world_mut()
        .spawn((Transform::default(), Satellite::new(owner, radius, rate)))
        .id()
}

pub fn translation(app: &App, entity: Entity) -> Vec3 {
    app.world().get::<Transform>(entity).unwrap().translation
}

pub fn body(app: &App, entity: Entity) -> OrbitingBody {
    app.world().get::<OrbitingBody>(entity).unwrap().clone()
}

/// Find a spawned body entity by display name.
pub fn body_named(app: &mut App, name: &str) -> Entity {
    let mut query = app.world_mut().query::<(Entity, &OrbitingBody)>();
    query
        .iter(app.world())
        .find(|(_, b)| b.name() == name)
        .map(|(e, _)| e)
        .unwrap_or_else(|| panic!("no body named {name}"))
}

/// Scene app with a primary window, a main camera and the hover and click
/// systems, already past its first frame and paused.
///
/// Returns the camera entity.
pub fn pointer_app(viewport: Vec2, camera: Transform) -> (App, Entity) {
    let mut app = scene_app(BodyCatalog::default());
    app.add_plugins(TransformPlugin)
        .init_resource::<ViewportSize>()
        .init_resource::<PointerState>()
        .init_resource::<HoveredBody>()
        .init_resource::<CameraFocus>()
        .init_resource::<PointerOverUi>()
        .init_resource::<ButtonInput<MouseButton>>()
        .add_systems(
            Update,
            (handle_resize, detect_hover, fly_to_clicked)
                .chain()
                .after(AdvanceOrbitsSet),
        );

    let mut window = Window::default();
    window.resolution.set(viewport.x, viewport.y);
    app.world_mut().spawn((window, PrimaryWindow));

    let camera = app
        .world_mut()
        .spawn((Projection::from(projection(1.0)), camera, MainCamera))
        .id();

    // Spawn the scene and propagate the camera's GlobalTransform
    app.update();
    app.insert_resource(PlayState::Paused);

    (app, camera)
}

/// Window pixel (logical, origin top-left) that `point` projects to.
pub fn screen_position(point: Vec3, camera: &Transform, viewport: Vec2) -> Vec2 {
    let lens = projection(viewport.x / viewport.y);
    let clip_from_view = Mat4::perspective_infinite_reverse_rh(lens.fov, lens.aspect_ratio, lens.near);
    let view = camera.rotation.inverse() * (point - camera.translation);
    let ndc = clip_from_view.project_point3(view);

    Vec2::new(
        (ndc.x + 1.0) / 2.0 * viewport.x,
        (1.0 - ndc.y) / 2.0 * viewport.y,
    )
}

/// Move the primary window's cursor.
pub fn set_cursor(app: &mut App, cursor: Vec2) {
    let mut query = app
        .world_mut()
        .query_filtered::<&mut Window, With<PrimaryWindow>>();
    for mut window in query.iter_mut(app.world_mut()) {
        window.set_cursor_position(Some(cursor));
    }
}

/// Press the left mouse button for the next frame.
pub fn click(app: &mut App) {
    let mut mouse = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
    mouse.release(MouseButton::Left);
    mouse.clear();
    mouse.press(MouseButton::Left);
}
