//! UI module providing the egui-based control panel and tooltip.

pub mod controls;
pub mod icons;
pub mod tooltip;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::render::spawn_solar_system;

pub use controls::{ControlPanel, SpeedControl, apply_speed, build_controls};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Controls bind to body entities, so they are built after the scene
            .add_systems(
                Startup,
                controls::setup_control_panel.after(spawn_solar_system),
            )
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (controls::control_panel_system, tooltip::tooltip_system)
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
