//! Core simulation types shared by the scene, animation and UI.

use bevy::prelude::*;

use crate::registry::BodyDescriptor;

/// Lowest speed a control can set (radians per frame).
pub const SPEED_MIN: f32 = 0.001;

/// Highest speed a control can set (radians per frame).
pub const SPEED_MAX: f32 = 0.05;

/// Slider increment.
pub const SPEED_STEP: f32 = 0.001;

/// Mutable orbital state of one body.
///
/// Lives on the body's mesh entity for the whole process lifetime; the
/// entity is never despawned.
#[derive(Component, Clone, Debug)]
pub struct OrbitingBody {
    pub descriptor: &'static BodyDescriptor,
    /// Position in the registry, used to keep UI order stable.
    pub index: usize,
    /// Accumulated orbital angle in radians (never wrapped).
    pub angle: f32,
    /// Current angular speed in radians per frame.
    pub speed: f32,
}

impl OrbitingBody {
    /// Fresh state at angle zero, moving at the descriptor's base speed.
    pub fn new(index: usize, descriptor: &'static BodyDescriptor) -> Self {
        Self {
            descriptor,
            index,
            angle: 0.0,
            speed: descriptor.base_speed,
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn radius(&self) -> f32 {
        self.descriptor.radius
    }

    pub fn orbit_distance(&self) -> f32 {
        self.descriptor.orbit_distance
    }

    /// Advance the angle by one frame at the current speed.
    pub fn step(&mut self) {
        self.angle += self.speed;
    }
}

/// A moon orbiting another body's current position.
///
/// Not transform-parented: its translation is recomputed from the owner
/// every frame.
#[derive(Component, Clone, Debug)]
pub struct Satellite {
    /// Entity carrying the owner's [`OrbitingBody`].
    pub owner: Entity,
    pub angle: f32,
    /// Distance from the owner's center.
    pub radius: f32,
    /// Fixed angular rate (radians per frame), independent of the owner's speed.
    pub rate: f32,
}

impl Satellite {
    pub fn new(owner: Entity, radius: f32, rate: f32) -> Self {
        Self {
            owner,
            angle: 0.0,
            radius,
            rate,
        }
    }
}

/// Marker for a ring attached as a child of a body.
#[derive(Component)]
pub struct PlanetRing;

/// Marker for the decorative orbit path of a body.
#[derive(Component)]
pub struct OrbitPath;

/// Marker for the sun at the origin.
#[derive(Component)]
pub struct Sun;

/// Whether orbital motion is advancing.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Running,
    Paused,
}

impl PlayState {
    pub fn is_paused(self) -> bool {
        self == PlayState::Paused
    }

    /// Flip between running and paused.
    pub fn toggle(&mut self) {
        *self = match self {
            PlayState::Running => PlayState::Paused,
            PlayState::Paused => PlayState::Running,
        };
    }

    /// Label for the action a button would perform next.
    pub fn button_label(self) -> &'static str {
        match self {
            PlayState::Running => "Pause",
            PlayState::Paused => "Resume",
        }
    }
}
