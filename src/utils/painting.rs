//! Sticker picking and recoloring: a ray from the camera through the
//! cursor, intersected against every sticker rectangle in world space.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::utils::constants::cube_constants::{STICKER_SIZE, TAP_MAX_DISTANCE};
use crate::utils::objects::{Brush, Screen, ScreenState, Sticker, StickerColor};

pub struct PaintingPlugin;

impl Plugin for PaintingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerTracker>()
            .add_systems(Update, (select_brush, pick_sticker));
    }
}

/// Tracks where the left button went down, to tell taps from orbit drags.
#[derive(Resource, Default)]
pub struct PointerTracker {
    pub pressed_at: Option<Vec2>,
}

/// Distance along the ray to the point where it crosses a rectangle of
/// `half_extent` centred at `center` with orientation `rotation` (the
/// rectangle lies in its local XY plane). The test is double sided.
pub fn ray_hits_rectangle(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    rotation: Quat,
    half_extent: f32,
) -> Option<f32> {
    let normal = rotation * Vec3::Z;
    let denom = direction.dot(normal);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (center - origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    let local = rotation.inverse() * (origin + direction * t - center);
    if local.x.abs() <= half_extent && local.y.abs() <= half_extent {
        Some(t)
    } else {
        None
    }
}

/// Digits 1-6 pick the Painter brush from the palette.
pub fn select_brush(
    keyboard: Res<ButtonInput<KeyCode>>,
    screen_state: Res<ScreenState>,
    mut brush: ResMut<Brush>,
) {
    if screen_state.screen != Screen::Painter {
        return;
    }
    const DIGITS: [KeyCode; 6] = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
    ];
    for (i, key) in DIGITS.iter().enumerate() {
        if keyboard.just_pressed(*key) {
            brush.0 = StickerColor::PALETTE[i];
            info!("brush set to {}", brush.0.name());
        }
    }
}

/// A left click (press and release without dragging) recolors the nearest
/// sticker under the cursor: palette cycling on the Editor screen, the
/// brush color on the Painter screen. Clicks land during turn animations
/// too; only turns are serialized.
pub fn pick_sticker(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    screen_state: Res<ScreenState>,
    brush: Res<Brush>,
    mut tracker: ResMut<PointerTracker>,
    mut stickers: Query<(
        Entity,
        &GlobalTransform,
        &mut Sticker,
        &MeshMaterial3d<StandardMaterial>,
    )>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !screen_state.screen.is_interactive() {
        tracker.pressed_at = None;
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        tracker.pressed_at = window.cursor_position();
        return;
    }
    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    let Some(pressed_at) = tracker.pressed_at.take() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if cursor.distance(pressed_at) > TAP_MAX_DISTANCE {
        // It was an orbit drag, not a repaint.
        return;
    }

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    // Find the closest sticker the ray crosses.
    let half = STICKER_SIZE / 2.0;
    let mut best: Option<(f32, Entity)> = None;
    for (entity, transform, _, _) in &stickers {
        let (_, rotation, translation) = transform.to_scale_rotation_translation();
        if let Some(t) = ray_hits_rectangle(ray.origin, *ray.direction, translation, rotation, half)
        {
            if best.is_none_or(|(b, _)| t < b) {
                best = Some((t, entity));
            }
        }
    }
    let Some((_, hit)) = best else {
        return;
    };

    let Ok((_, _, mut sticker, material_handle)) = stickers.get_mut(hit) else {
        return;
    };
    let new_color = match screen_state.screen {
        Screen::Painter => brush.0,
        _ => sticker.color.next(),
    };
    sticker.color = new_color;
    if let Some(material) = materials.get_mut(&material_handle.0) {
        material.base_color = new_color.color();
    }
    info!("sticker repainted {}", new_color.name());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_on_ray_hits_the_sticker_center() {
        // Sticker on the +Z face of the front-centre cubie.
        let center = Vec3::new(0.0, 0.0, 1.51);
        let rotation = Quat::IDENTITY; // local XY plane already faces +Z
        let t = ray_hits_rectangle(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, center, rotation, 0.45);
        assert!(t.is_some());
        assert!((t.unwrap() - 8.49).abs() < 1e-4);
    }

    #[test]
    fn rays_outside_the_bounds_miss() {
        let center = Vec3::new(0.0, 0.0, 1.51);
        let t = ray_hits_rectangle(
            Vec3::new(0.5, 0.0, 10.0),
            -Vec3::Z,
            center,
            Quat::IDENTITY,
            0.45,
        );
        assert!(t.is_none());
    }

    #[test]
    fn hits_behind_the_origin_are_rejected() {
        let center = Vec3::new(0.0, 0.0, 1.51);
        let t = ray_hits_rectangle(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::Z,
            center,
            Quat::IDENTITY,
            0.45,
        );
        assert!(t.is_none());
    }

    #[test]
    fn parallel_rays_never_hit() {
        let center = Vec3::new(0.0, 0.0, 1.51);
        let t = ray_hits_rectangle(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::X,
            center,
            Quat::IDENTITY,
            0.45,
        );
        assert!(t.is_none());
    }

    #[test]
    fn rotated_stickers_are_hit_in_their_own_plane() {
        // Sticker on the +X face: rectangle rotated from +Z to +X.
        let rotation = Quat::from_rotation_arc(Vec3::Z, Vec3::X);
        let center = Vec3::new(1.51, 0.0, 0.0);
        let t = ray_hits_rectangle(Vec3::new(10.0, 0.2, 0.2), -Vec3::X, center, rotation, 0.45);
        assert!(t.is_some());
        // The same ray shifted past the edge misses.
        let miss = ray_hits_rectangle(Vec3::new(10.0, 0.5, 0.0), -Vec3::X, center, rotation, 0.45);
        assert!(miss.is_none());
    }

    #[test]
    fn the_test_is_double_sided() {
        let center = Vec3::new(0.0, 0.0, 1.51);
        // Approach from behind the rectangle's facing direction.
        let t = ray_hits_rectangle(
            Vec3::new(0.0, 0.0, -10.0),
            Vec3::Z,
            center,
            Quat::IDENTITY,
            0.45,
        );
        assert!(t.is_some());
    }
}
