//! Circular orbit geometry in the XZ plane.

use bevy::prelude::*;

/// Position on a circular orbit around the origin.
///
/// The orbit lies in the XZ plane; `y` is always zero.
pub fn orbit_position(angle: f32, distance: f32) -> Vec3 {
    Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
}

/// Position of a satellite orbiting `owner` at `radius`.
///
/// The satellite shares the owner's `y`, so the orbit stays planar.
pub fn satellite_position(owner: Vec3, angle: f32, radius: f32) -> Vec3 {
    Vec3::new(
        owner.x + angle.cos() * radius,
        owner.y,
        owner.z + angle.sin() * radius,
    )
}
