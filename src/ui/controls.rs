//! Control panel with per-body speed sliders and the pause/theme buttons.
//!
//! The list of controls is built once, after the bodies are spawned. Each
//! control holds its body's entity, so a slider change goes straight to the
//! right [`OrbitingBody`] without looking anything up by name.

use std::ops::RangeInclusive;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::theme::{Theme, ThemePalette};
use crate::types::{OrbitingBody, PlayState, SPEED_MAX, SPEED_MIN, SPEED_STEP};

use super::icons;

/// One labeled speed slider bound to a body.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedControl {
    pub entity: Entity,
    pub label: &'static str,
    pub range: RangeInclusive<f32>,
    pub step: f32,
    /// Speed the body had when the control was created.
    pub initial: f32,
}

/// Speed controls in registry order.
#[derive(Resource, Clone, Debug, Default)]
pub struct ControlPanel {
    pub controls: Vec<SpeedControl>,
}

/// Build one speed control per body, ordered as in the registry.
pub fn build_controls<'a>(
    bodies: impl IntoIterator<Item = (Entity, &'a OrbitingBody)>,
) -> ControlPanel {
    let mut bodies: Vec<_> = bodies.into_iter().collect();
    bodies.sort_by_key(|(_, body)| body.index);

    let controls = bodies
        .into_iter()
        .map(|(entity, body)| SpeedControl {
            entity,
            label: body.name(),
            range: SPEED_MIN..=SPEED_MAX,
            step: SPEED_STEP,
            initial: body.speed,
        })
        .collect();

    ControlPanel { controls }
}

/// Overwrite a body's speed with a control's value.
///
/// Range enforcement is the slider's job.
pub fn apply_speed(body: &mut OrbitingBody, value: f32) {
    body.speed = value;
}

/// Startup system recording the controls for the spawned bodies.
pub fn setup_control_panel(mut commands: Commands, bodies: Query<(Entity, &OrbitingBody)>) {
    let panel = build_controls(&bodies);
    info!("Built {} speed controls", panel.controls.len());
    commands.insert_resource(panel);
}

pub(crate) fn to_color32(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.to_srgba().to_u8_array();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// egui visuals for a theme palette.
pub fn themed_visuals(theme: Theme, palette: &ThemePalette) -> egui::Visuals {
    let mut visuals = match theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    };
    visuals.panel_fill = to_color32(palette.page_background);
    visuals.window_fill = to_color32(palette.page_background);
    visuals.override_text_color = Some(to_color32(palette.text));
    visuals
}

/// System that renders the control panel.
pub fn control_panel_system(
    mut contexts: EguiContexts,
    panel: Option<Res<ControlPanel>>,
    mut bodies: Query<&mut OrbitingBody>,
    mut play_state: ResMut<PlayState>,
    mut theme: ResMut<Theme>,
    mut applied_theme: Local<Option<Theme>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if *applied_theme != Some(*theme) {
        ctx.set_visuals(themed_visuals(*theme, &theme.palette()));
        *applied_theme = Some(*theme);
    }

    let palette = theme.palette();

    egui::SidePanel::left("controls")
        .resizable(false)
        .default_width(220.0)
        .frame(
            egui::Frame::new()
                .fill(to_color32(palette.page_background))
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            ui.heading(format!("{} Orrery", icons::PLANET));
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let icon = if play_state.is_paused() {
                    icons::PLAY
                } else {
                    icons::PAUSE
                };
                if ui
                    .button(format!("{icon} {}", play_state.button_label()))
                    .on_hover_text("Space")
                    .clicked()
                {
                    play_state.toggle();
                    info!(
                        "Simulation {}",
                        if play_state.is_paused() { "paused" } else { "running" }
                    );
                }

                let icon = match *theme {
                    Theme::Dark => icons::SUN,
                    Theme::Light => icons::MOON,
                };
                if ui
                    .button(format!("{icon} {}", palette.button_label))
                    .on_hover_text("T")
                    .clicked()
                {
                    theme.toggle();
                    info!("Theme: {:?}", *theme);
                }
            });

            ui.separator();

            let Some(panel) = panel else {
                return;
            };

            for control in &panel.controls {
                let Ok(mut body) = bodies.get_mut(control.entity) else {
                    continue;
                };

                ui.label(control.label);
                ui.horizontal(|ui| {
                    let mut value = body.speed;
                    let response = ui.add(
                        egui::Slider::new(&mut value, control.range.clone())
                            .step_by(control.step as f64)
                            .show_value(false),
                    );
                    if response.changed() {
                        apply_speed(&mut body, value);
                    }
                    // Readout reflects the change in the same frame
                    ui.label(egui::RichText::new(format!("{:.3}", body.speed)).monospace());
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BODIES;

    fn entities(count: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn test_controls_follow_registry_order() {
        let bodies: Vec<_> = BODIES
            .iter()
            .enumerate()
            .map(|(i, d)| OrbitingBody::new(i, d))
            .collect();
        let ids = entities(bodies.len());
        // Feed them in reverse to make sure order comes from the index
        let panel = build_controls(ids.iter().copied().zip(bodies.iter()).rev());

        let labels: Vec<_> = panel.controls.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
        assert_eq!(panel.controls[2].entity, ids[2]);
    }

    #[test]
    fn test_control_bounds_and_initial_value() {
        let earth = OrbitingBody::new(2, &BODIES[2]);
        let panel = build_controls([(entities(1)[0], &earth)]);
        let control = &panel.controls[0];

        assert_eq!(control.range, 0.001..=0.05);
        assert_eq!(control.step, 0.001);
        assert_eq!(control.initial, 0.01);
    }

    #[test]
    fn test_apply_speed_overrides_base_speed() {
        let mut body = OrbitingBody::new(0, &BODIES[0]);
        apply_speed(&mut body, 0.002);
        assert_eq!(body.speed, 0.002);
        assert_eq!(body.descriptor.base_speed, 0.04);
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_color32(Color::WHITE), egui::Color32::WHITE);
        assert_eq!(to_color32(Color::BLACK), egui::Color32::BLACK);
    }
}
