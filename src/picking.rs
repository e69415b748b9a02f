//! Ray picking of orbiting bodies under the pointer.
//!
//! Each body is tested as a bounding sphere of its mesh radius, which is
//! exact for the UV spheres the scene spawns.

use bevy::math::bounding::{BoundingSphere, RayCast3d};
use bevy::prelude::*;

/// Far limit for pick rays, comfortably past the outermost orbit.
pub const MAX_PICK_DISTANCE: f32 = 1000.0;

/// Nearest body hit by a pick ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub entity: Entity,
    /// Distance along the ray to the hit.
    pub distance: f32,
}

/// Cast `ray` against candidate spheres and return the nearest hit.
///
/// Candidates are `(entity, center, radius)`. Ties keep the earliest
/// candidate.
pub fn pick(
    ray: Ray3d,
    candidates: impl IntoIterator<Item = (Entity, Vec3, f32)>,
) -> Option<PickHit> {
    let cast = RayCast3d::from_ray(ray, MAX_PICK_DISTANCE);

    candidates
        .into_iter()
        .filter_map(|(entity, center, radius)| {
            cast.sphere_intersection_at(&BoundingSphere::new(center, radius))
                .map(|distance| PickHit { entity, distance })
        })
        .fold(None, |nearest: Option<PickHit>, hit| match nearest {
            Some(n) if n.distance <= hit.distance => Some(n),
            _ => Some(hit),
        })
}

/// World-space ray from the camera through a window-space cursor position.
///
/// Builds the ray from the perspective projection and the viewport size in
/// logical pixels, so it needs no render target. `None` for an empty
/// viewport.
pub fn pointer_ray(
    projection: &PerspectiveProjection,
    camera_transform: &GlobalTransform,
    cursor: Vec2,
    viewport: Vec2,
) -> Option<Ray3d> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }

    let ndc = normalized_pointer(cursor, viewport);
    let half_height = (projection.fov / 2.0).tan();
    // Camera looks down -Z in view space
    let view_direction = Vec3::new(
        ndc.x * half_height * projection.aspect_ratio,
        ndc.y * half_height,
        -1.0,
    );
    let direction = Dir3::new(camera_transform.affine().transform_vector3(view_direction)).ok()?;

    Some(Ray3d::new(camera_transform.translation(), direction))
}

/// Convert a window-space cursor position to normalized device coordinates.
///
/// `x` runs -1..1 left to right and `y` runs -1..1 bottom to top.
pub fn normalized_pointer(cursor: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        cursor.x / window_size.x * 2.0 - 1.0,
        -(cursor.y / window_size.y) * 2.0 + 1.0,
    )
}
