//! Camera system for the orrery.
//!
//! Provides the perspective camera, click-to-fly repositioning, scroll
//! dolly and aspect-ratio tracking on window resize.

use bevy::{input::mouse::AccumulatedMouseScroll, prelude::*, window::PrimaryWindow};

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;

/// Near clip plane.
pub const NEAR: f32 = 0.1;

/// Far clip plane.
pub const FAR: f32 = 1000.0;

/// Offset from a clicked body to the camera's new position.
pub const FLY_TO_OFFSET: Vec3 = Vec3::new(5.0, 2.0, 5.0);

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Tunables for camera placement and zoom.
#[derive(Resource, Clone, Debug)]
pub struct CameraSettings {
    /// Initial camera position, looking at the origin.
    pub home: Vec3,
    /// Fraction of the focus distance moved per scroll line.
    pub zoom_speed: f32,
    /// Closest the camera may dolly to its focus point.
    pub min_distance: f32,
    /// Furthest the camera may dolly from its focus point.
    pub max_distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            home: Vec3::new(0.0, 0.0, 30.0),
            zoom_speed: 0.1,
            min_distance: 1.0,
            max_distance: 200.0,
        }
    }
}

/// Point the camera is looking at, used as the dolly pivot.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct CameraFocus {
    pub target: Vec3,
}

/// Last known size of the primary window in logical pixels.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSize(pub Vec2);

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .init_resource::<CameraFocus>()
            .init_resource::<ViewportSize>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (handle_resize, camera_zoom));
    }
}

/// Perspective projection matching the viewport's aspect ratio.
pub fn projection(aspect_ratio: f32) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: FOV_DEGREES.to_radians(),
        aspect_ratio,
        near: NEAR,
        far: FAR,
        ..default()
    }
}

/// Spawn the main camera at its home position.
fn setup_camera(mut commands: Commands, settings: Res<CameraSettings>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(projection(1.0)),
        Transform::from_translation(settings.home).looking_at(Vec3::ZERO, Vec3::Y),
        // Scene-wide fill light; the point light at the sun does the rest
        AmbientLight {
            color: Color::WHITE,
            brightness: 400.0,
            ..default()
        },
        MainCamera,
    ));
}

/// Jump the camera next to `target` and look straight at it.
///
/// One-shot: the camera does not follow the target afterwards.
pub fn fly_to(transform: &mut Transform, target: Vec3) {
    *transform = Transform::from_translation(target + FLY_TO_OFFSET).looking_at(target, Vec3::Y);
}

/// Put the camera back at its home pose.
pub fn reset_view(transform: &mut Transform, focus: &mut CameraFocus, settings: &CameraSettings) {
    *transform = Transform::from_translation(settings.home).looking_at(Vec3::ZERO, Vec3::Y);
    focus.target = Vec3::ZERO;
}

/// Keep the projection's aspect ratio in step with the window.
///
/// Idempotent, so it is harmless that `Changed<Window>` also fires for
/// cursor movement.
pub fn handle_resize(
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
    mut viewport: ResMut<ViewportSize>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let size = Vec2::new(window.width(), window.height());
    if size.y <= 0.0 {
        return;
    }

    if viewport.0 != size {
        viewport.0 = size;
    }

    let Ok(mut projection) = camera_query.single_mut() else {
        return;
    };

    if let Projection::Perspective(ref mut perspective) = *projection {
        perspective.aspect_ratio = size.x / size.y;
    }
}

/// Dolly the camera toward or away from its focus point on scroll.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    settings: Res<CameraSettings>,
    focus: Res<CameraFocus>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    // Skip if no scroll input
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let offset = transform.translation - focus.target;
    let distance = offset.length();
    if distance <= f32::EPSILON {
        return;
    }

    // Logarithmic zoom: scale the distance by a factor based on scroll direction
    let zoom_factor = 1.0 - mouse_scroll.delta.y * settings.zoom_speed;
    let new_distance =
        (distance * zoom_factor).clamp(settings.min_distance, settings.max_distance);
    transform.translation = focus.target + offset / distance * new_distance;
}
