//! Scene construction for the orrery.
//!
//! This module spawns the bodies and their attachments, the orbit paths,
//! the sun, lights and starfield, and draws the hover highlight.

pub mod background;
pub mod bodies;
pub mod highlight;
pub mod orbits;

use bevy::prelude::*;

use self::highlight::HighlightPlugin;
use crate::registry::BodyCatalog;

// Re-export for use in other modules
pub use self::background::{BackgroundPlugin, star_positions};
pub use self::bodies::{CelestialBodyPlugin, spawn_solar_system};
pub use self::highlight::{HoveredBody, PointerState};
pub use self::orbits::OrbitPathPlugin;

/// Plugin aggregating all scene construction and rendering helpers.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneSettings>()
            .init_resource::<BodyCatalog>()
            .add_plugins((
                CelestialBodyPlugin,
                BackgroundPlugin,
                OrbitPathPlugin,
                HighlightPlugin,
            ));
    }
}

/// Tunables for scene construction.
#[derive(Resource, Clone, Debug)]
pub struct SceneSettings {
    /// Number of background stars.
    pub star_count: usize,
    /// Edge length of the cube the stars are scattered in.
    pub star_spread: f32,
    /// Radius of each star sphere.
    pub star_size: f32,
    /// Moon sphere radius.
    pub moon_radius: f32,
    /// Moon distance from its owner's center.
    pub moon_orbit_radius: f32,
    /// Moon angular rate in radians per frame.
    pub moon_rate: f32,
    /// Ring inner and outer radius as multiples of the body radius.
    pub ring_inner_scale: f32,
    pub ring_outer_scale: f32,
    /// Half-width of an orbit path annulus.
    pub orbit_path_half_width: f32,
    /// Opacity of orbit paths.
    pub orbit_path_alpha: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            star_count: 1000,
            star_spread: 600.0,
            star_size: 0.35,
            moon_radius: 0.1,
            moon_orbit_radius: 0.8,
            moon_rate: 0.03,
            ring_inner_scale: 1.2,
            ring_outer_scale: 2.5,
            orbit_path_half_width: 0.01,
            orbit_path_alpha: 0.2,
        }
    }
}
