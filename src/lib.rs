//! Orrery - Interactive Solar System Model
//!
//! A library crate providing the orrery's scene, animation and UI
//! components for testing and integration purposes.

pub mod animation;
pub mod camera;
pub mod input;
pub mod orbit;
pub mod picking;
pub mod registry;
pub mod render;
pub mod theme;
pub mod types;
pub mod ui;
