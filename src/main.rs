//! Orrery - Interactive Solar System Model
//!
//! A desktop application showing the planets circling the sun, with
//! per-planet speed controls, hover labels and click-to-focus.

use bevy::prelude::*;
use bevy::winit::WinitSettings;
use bevy_egui::EguiPlugin;

use orrery::animation::AnimationPlugin;
use orrery::camera::CameraPlugin;
use orrery::input::InputPlugin;
use orrery::render::RenderPlugin;
use orrery::theme::ThemePlugin;
use orrery::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Redraw every frame even without input
        .insert_resource(WinitSettings::game())
        // Add simulation plugins
        .add_plugins((
            ThemePlugin,
            CameraPlugin,
            AnimationPlugin,
            RenderPlugin,
            InputPlugin,
            UiPlugin,
        ))
        .run();
}
