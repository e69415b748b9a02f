//! Hover detection and highlighting for orbiting bodies.
//!
//! The hovered body is re-picked whenever the cursor moves and gets a ring
//! drawn around it; the tooltip in `ui::tooltip` reads the same resource.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::animation::AdvanceOrbitsSet;
use crate::camera::{MainCamera, ViewportSize, handle_resize};
use crate::picking::{PickHit, pick, pointer_ray};
use crate::types::OrbitingBody;

/// Plugin providing hover highlighting.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredBody>()
            .init_resource::<PointerState>()
            .add_systems(
                Update,
                (detect_hover, draw_highlight)
                    .chain()
                    .after(AdvanceOrbitsSet)
                    .after(handle_resize),
            );
    }
}

/// Last known cursor position in window coordinates.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub position: Option<Vec2>,
}

/// Resource tracking the currently hovered body.
#[derive(Resource, Default)]
pub struct HoveredBody {
    /// Entity of the currently hovered body, if any.
    pub entity: Option<Entity>,
    /// Cursor position the hover was computed at.
    pub cursor: Vec2,
}

/// Candidate spheres for picking: every orbiting body, nothing else.
pub fn body_spheres<'a>(
    bodies: impl IntoIterator<Item = (Entity, &'a Transform, &'a OrbitingBody)>,
) -> impl Iterator<Item = (Entity, Vec3, f32)> {
    bodies
        .into_iter()
        .map(|(entity, transform, body)| (entity, transform.translation, body.radius()))
}

/// Pick the body under `cursor` as seen from the main camera.
///
/// Only perspective cameras pick.
pub fn pick_at_cursor(
    cursor: Vec2,
    projection: &Projection,
    camera_transform: &GlobalTransform,
    viewport: Vec2,
    candidates: impl IntoIterator<Item = (Entity, Vec3, f32)>,
) -> Option<PickHit> {
    let Projection::Perspective(perspective) = projection else {
        return None;
    };
    let ray = pointer_ray(perspective, camera_transform, cursor, viewport)?;
    pick(ray, candidates)
}

/// Re-pick the hovered body when the cursor moves.
pub fn detect_hover(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Projection, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(Entity, &Transform, &OrbitingBody), Without<MainCamera>>,
    viewport: Res<ViewportSize>,
    mut pointer: ResMut<PointerState>,
    mut hovered: ResMut<HoveredBody>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let Some(cursor_pos) = window.cursor_position() else {
        if pointer.position.is_some() {
            pointer.position = None;
            hovered.entity = None;
        }
        return;
    };

    if pointer.position == Some(cursor_pos) {
        return;
    }
    pointer.position = Some(cursor_pos);

    let Ok((projection, camera_transform)) = camera_query.single() else {
        return;
    };

    hovered.entity = pick_at_cursor(
        cursor_pos,
        projection,
        camera_transform,
        viewport.0,
        body_spheres(&bodies),
    )
    .map(|hit| hit.entity);
    hovered.cursor = cursor_pos;
}

/// Draw highlight ring around hovered body.
fn draw_highlight(
    mut gizmos: Gizmos,
    hovered: Res<HoveredBody>,
    bodies: Query<(&Transform, &OrbitingBody)>,
) {
    let Some(entity) = hovered.entity else {
        return;
    };

    let Ok((transform, body)) = bodies.get(entity) else {
        return;
    };

    let ring_radius = body.radius() * 1.5;
    let center = transform.translation;
    let color = Color::srgba(0.0, 1.0, 1.0, 0.8); // Cyan

    // Circle in the orbital plane, drawn with line segments
    let segments = 32;
    for i in 0..segments {
        let t0 = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let t1 = ((i + 1) as f32 / segments as f32) * std::f32::consts::TAU;

        let p0 = center + Vec3::new(ring_radius * t0.cos(), 0.0, ring_radius * t0.sin());
        let p1 = center + Vec3::new(ring_radius * t1.cos(), 0.0, ring_radius * t1.sin());

        gizmos.line(p0, p1, color);
    }
}
