//! Dark/light color themes.
//!
//! Purely cosmetic: switching theme never touches simulation state.

use bevy::prelude::*;

/// Scene background in the dark theme (`#0d1b2a`).
pub const DARK_SCENE_BACKGROUND: Color = Color::srgb(13.0 / 255.0, 27.0 / 255.0, 42.0 / 255.0);

/// Scene background in the light theme (`#f0f0f0`).
pub const LIGHT_SCENE_BACKGROUND: Color = Color::srgb(240.0 / 255.0, 240.0 / 255.0, 240.0 / 255.0);

/// Active color theme.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Every cosmetic property a theme controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemePalette {
    /// Background of the UI panels.
    pub page_background: Color,
    /// Foreground text color.
    pub text: Color,
    /// Clear color behind the 3D scene.
    pub scene_background: Color,
    /// Label of the theme button, naming the theme it switches to.
    pub button_label: &'static str,
}

impl Theme {
    /// Switch to the other theme.
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Theme::Dark => ThemePalette {
                page_background: Color::BLACK,
                text: Color::WHITE,
                scene_background: DARK_SCENE_BACKGROUND,
                button_label: "Switch to Light Theme",
            },
            Theme::Light => ThemePalette {
                page_background: Color::WHITE,
                text: Color::BLACK,
                scene_background: LIGHT_SCENE_BACKGROUND,
                button_label: "Switch to Dark Theme",
            },
        }
    }
}

/// Plugin keeping the scene clear color in step with the theme.
pub struct ThemePlugin;

impl Plugin for ThemePlugin {
    fn build(&self, app: &mut App) {
        let theme = Theme::default();
        app.insert_resource(theme)
            .insert_resource(ClearColor(theme.palette().scene_background))
            .add_systems(Update, apply_scene_background);
    }
}

/// Copy the theme's scene background into [`ClearColor`] when the theme changes.
pub fn apply_scene_background(theme: Res<Theme>, mut clear_color: ResMut<ClearColor>) {
    if !theme.is_changed() {
        return;
    }

    clear_color.0 = theme.palette().scene_background;
}
