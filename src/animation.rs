//! Per-frame orbital motion.
//!
//! Angles advance by a fixed amount per frame rather than per second, so
//! speeds read directly as radians per frame. Rendering is issued by the
//! engine every frame whether or not motion is paused.

use bevy::prelude::*;

use crate::orbit::{orbit_position, satellite_position};
use crate::types::{OrbitingBody, PlayState, Satellite};

/// System set for orbital position updates.
///
/// Picking and camera systems that read body positions run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdvanceOrbitsSet;

/// Plugin providing orbital animation.
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayState>().add_systems(
            Update,
            (advance_orbits, advance_satellites)
                .chain()
                .in_set(AdvanceOrbitsSet),
        );
    }
}

/// Advance every body's angle and move its mesh onto the new orbit point.
pub fn advance_orbits(
    play_state: Res<PlayState>,
    mut bodies: Query<(&mut OrbitingBody, &mut Transform)>,
) {
    if play_state.is_paused() {
        return;
    }

    for (mut body, mut transform) in bodies.iter_mut() {
        body.step();
        transform.translation = orbit_position(body.angle, body.orbit_distance());
    }
}

/// Move satellites around their owners' freshly updated positions.
pub fn advance_satellites(
    play_state: Res<PlayState>,
    mut satellites: Query<(&mut Satellite, &mut Transform), Without<OrbitingBody>>,
    owners: Query<&Transform, With<OrbitingBody>>,
) {
    if play_state.is_paused() {
        return;
    }

    for (mut satellite, mut transform) in satellites.iter_mut() {
        let Ok(owner) = owners.get(satellite.owner) else {
            continue;
        };

        satellite.angle += satellite.rate;
        transform.translation =
            satellite_position(owner.translation, satellite.angle, satellite.radius);
    }
}
