//! Name tooltip for the body under the cursor.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::render::HoveredBody;
use crate::theme::Theme;
use crate::types::OrbitingBody;

use super::controls::to_color32;

/// Offset from the cursor to the tooltip's top-left corner, in pixels.
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

/// Where the tooltip for a cursor position goes.
pub fn tooltip_position(cursor: Vec2) -> Vec2 {
    cursor + TOOLTIP_OFFSET
}

/// Draw the hovered body's name next to the cursor; nothing when no body is hovered.
pub fn tooltip_system(
    mut contexts: EguiContexts,
    hovered: Res<HoveredBody>,
    bodies: Query<&OrbitingBody>,
    theme: Res<Theme>,
) {
    let Some(entity) = hovered.entity else {
        return;
    };

    let Ok(body) = bodies.get(entity) else {
        return;
    };

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let pos = tooltip_position(hovered.cursor);
    let palette = theme.palette();

    egui::Area::new(egui::Id::new("body_tooltip"))
        .fixed_pos(egui::pos2(pos.x, pos.y))
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(to_color32(palette.page_background))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(body.name()).color(to_color32(palette.text)));
                });
        });
}
