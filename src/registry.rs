//! Static descriptions of the orbiting bodies.
//!
//! Order is display and spawn order only; it carries no physical meaning.
//! Sizes and distances are in render units, speeds in radians per frame.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::types::{SPEED_MAX, SPEED_MIN};

/// Secondary visual carried by a body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    #[default]
    None,
    /// Flat ring rigidly parented to the body.
    Ring,
    /// Small moon orbiting the body's current position.
    Satellite,
}

/// Immutable data for one orbiting body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDescriptor {
    /// Display name, unique within the registry.
    pub name: &'static str,
    /// Sphere radius.
    pub radius: f32,
    /// Distance of the circular orbit from the origin.
    pub orbit_distance: f32,
    /// Initial angular speed (radians per frame).
    pub base_speed: f32,
    /// Surface texture, relative to the asset root.
    pub texture: &'static str,
    pub attachment: AttachmentKind,
}

/// The eight planets, innermost first.
pub static BODIES: [BodyDescriptor; 8] = [
    BodyDescriptor {
        name: "Mercury",
        radius: 0.2,
        orbit_distance: 4.0,
        base_speed: 0.04,
        texture: "textures/mercury.jpg",
        attachment: AttachmentKind::None,
    },
    BodyDescriptor {
        name: "Venus",
        radius: 0.4,
        orbit_distance: 6.0,
        base_speed: 0.015,
        texture: "textures/venus.jpg",
        attachment: AttachmentKind::None,
    },
    BodyDescriptor {
        name: "Earth",
        radius: 0.4,
        orbit_distance: 8.0,
        base_speed: 0.01,
        texture: "textures/earth.jpg",
        attachment: AttachmentKind::Satellite,
    },
    BodyDescriptor {
        name: "Mars",
        radius: 0.3,
        orbit_distance: 10.0,
        base_speed: 0.008,
        texture: "textures/mars.jpg",
        attachment: AttachmentKind::None,
    },
    BodyDescriptor {
        name: "Jupiter",
        radius: 0.8,
        orbit_distance: 13.0,
        base_speed: 0.006,
        texture: "textures/jupiter.jpg",
        attachment: AttachmentKind::None,
    },
    BodyDescriptor {
        name: "Saturn",
        radius: 0.7,
        orbit_distance: 16.0,
        base_speed: 0.005,
        texture: "textures/saturn.jpg",
        attachment: AttachmentKind::Ring,
    },
    BodyDescriptor {
        name: "Uranus",
        radius: 0.6,
        orbit_distance: 19.0,
        base_speed: 0.004,
        texture: "textures/uranus.jpg",
        attachment: AttachmentKind::None,
    },
    BodyDescriptor {
        name: "Neptune",
        radius: 0.6,
        orbit_distance: 22.0,
        base_speed: 0.003,
        texture: "textures/neptune.jpg",
        attachment: AttachmentKind::None,
    },
];

/// Sun radius (the sun sits at the origin and does not orbit).
pub const SUN_RADIUS: f32 = 2.0;

/// Sun surface texture.
pub const SUN_TEXTURE: &str = "textures/sun.jpg";

/// Texture for ring attachments.
pub const RING_TEXTURE: &str = "textures/saturn_ring.png";

/// Texture for satellite attachments.
pub const MOON_TEXTURE: &str = "textures/moon.jpg";

/// All registered bodies in spawn order.
pub fn bodies() -> &'static [BodyDescriptor] {
    &BODIES
}

/// Descriptor set the scene is built from.
///
/// Defaults to [`BODIES`]; replaced only to build a reduced scene.
#[derive(Resource, Clone, Copy, Debug)]
pub struct BodyCatalog(pub &'static [BodyDescriptor]);

impl Default for BodyCatalog {
    fn default() -> Self {
        Self(bodies())
    }
}

/// Look up a descriptor by display name.
pub fn find(name: &str) -> Option<&'static BodyDescriptor> {
    BODIES.iter().find(|b| b.name == name)
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("duplicate body name {0:?}")]
    DuplicateName(&'static str),

    #[error("body {name:?} has non-positive {field} ({value})")]
    NonPositive {
        name: &'static str,
        field: &'static str,
        value: f32,
    },

    #[error("body {name:?} base speed {speed} outside [{min}, {max}]")]
    SpeedOutOfRange {
        name: &'static str,
        speed: f32,
        min: f32,
        max: f32,
    },
}

/// Check the invariants every descriptor set must satisfy.
///
/// Reports the first violation found, in registry order.
pub fn validate(descriptors: &[BodyDescriptor]) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();

    for body in descriptors {
        if !seen.insert(body.name) {
            return Err(RegistryError::DuplicateName(body.name));
        }

        for (field, value) in [
            ("radius", body.radius),
            ("orbit distance", body.orbit_distance),
            ("base speed", body.base_speed),
        ] {
            if !(value > 0.0) {
                return Err(RegistryError::NonPositive {
                    name: body.name,
                    field,
                    value,
                });
            }
        }

        if !(SPEED_MIN..=SPEED_MAX).contains(&body.base_speed) {
            return Err(RegistryError::SpeedOutOfRange {
                name: body.name,
                speed: body.base_speed,
                min: SPEED_MIN,
                max: SPEED_MAX,
            });
        }
    }

    Ok(())
}
