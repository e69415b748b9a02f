//! Input handling for mouse clicks and keyboard shortcuts.
//!
//! Clicking a body flies the camera next to it; keys mirror the panel
//! buttons.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::animation::AdvanceOrbitsSet;
use crate::camera::{CameraFocus, CameraSettings, MainCamera, ViewportSize, fly_to, reset_view};
use crate::render::PointerState;
use crate::render::highlight::{body_spheres, detect_hover, pick_at_cursor};
use crate::theme::Theme;
use crate::types::{OrbitingBody, PlayState};

/// Plugin providing click-to-focus and keyboard shortcuts.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerOverUi>().add_systems(
            Update,
            (
                keyboard_shortcuts,
                track_pointer_over_ui,
                fly_to_clicked
                    .after(AdvanceOrbitsSet)
                    .after(detect_hover)
                    .after(track_pointer_over_ui),
            ),
        );
    }
}

/// Whether egui claims the pointer this frame.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct PointerOverUi(pub bool);

/// Record whether the pointer belongs to the control panel.
fn track_pointer_over_ui(mut contexts: EguiContexts, mut over_ui: ResMut<PointerOverUi>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        over_ui.0 = false;
        return;
    };

    over_ui.0 = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut play_state: ResMut<PlayState>,
    mut theme: ResMut<Theme>,
    settings: Res<CameraSettings>,
    mut focus: ResMut<CameraFocus>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        play_state.toggle();
        info!(
            "Simulation {}",
            if play_state.is_paused() { "paused" } else { "running" }
        );
    }

    // T: toggle theme
    if keys.just_pressed(KeyCode::KeyT) {
        theme.toggle();
        info!("Theme: {:?}", *theme);
    }

    // Home: back to the initial view
    if keys.just_pressed(KeyCode::Home) {
        if let Ok(mut transform) = camera_query.single_mut() {
            reset_view(&mut transform, &mut focus, &settings);
        }
    }
}

/// Fly the camera to the body under the last known cursor position.
pub fn fly_to_clicked(
    mouse: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerState>,
    over_ui: Res<PointerOverUi>,
    viewport: Res<ViewportSize>,
    mut camera_query: Query<(&Projection, &GlobalTransform, &mut Transform), With<MainCamera>>,
    bodies: Query<(Entity, &Transform, &OrbitingBody), Without<MainCamera>>,
    mut focus: ResMut<CameraFocus>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    // Clicks on the control panel belong to egui
    if over_ui.0 {
        return;
    }

    let Some(cursor) = pointer.position else {
        return;
    };

    let Ok((projection, camera_global, mut transform)) = camera_query.single_mut() else {
        return;
    };

    let Some(hit) = pick_at_cursor(
        cursor,
        projection,
        camera_global,
        viewport.0,
        body_spheres(&bodies),
    ) else {
        return;
    };

    let Ok((_, target_transform, body)) = bodies.get(hit.entity) else {
        return;
    };
    let target = target_transform.translation;

    fly_to(&mut transform, target);
    focus.target = target;
    info!("Focused camera on {}", body.name());
}
