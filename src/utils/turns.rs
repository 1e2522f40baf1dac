//! Layer rotation: pick the layer, parent it under a pivot, animate the
//! pivot through a quarter turn, then snap everything back to the grid.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::utils::constants::cube_constants::{CUBIE_SPACING, SNAP_EPSILON};
use crate::utils::objects::{ActiveTurn, Axis, Cubie, TurnCommand, TurnPivot, TurnState};

pub struct TurnsPlugin;

impl Plugin for TurnsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TurnState>()
            .add_message::<TurnCommand>()
            .add_systems(Update, (begin_turn, animate_turn).chain());
    }
}

/// Signed quarter-turn target angle. Clockwise is the negative direction.
pub fn turn_angle(clockwise: bool) -> f32 {
    if clockwise { -FRAC_PI_2 } else { FRAC_PI_2 }
}

/// Pivot orientation at `progress` in [0, 1] of a quarter turn.
pub fn turn_quat(axis: Axis, clockwise: bool, progress: f32) -> Quat {
    Quat::from_axis_angle(axis.unit(), turn_angle(clockwise) * progress)
}

/// Whether a cubie at `translation` belongs to the layer `index` along `axis`.
pub fn in_layer(translation: Vec3, axis: Axis, index: i32) -> bool {
    (axis.component(translation) / CUBIE_SPACING).round() as i32 == index
}

/// Round a translation back onto the integer grid.
pub fn snap_translation(translation: Vec3) -> Vec3 {
    (translation / CUBIE_SPACING).round() * CUBIE_SPACING
}

/// Snap an orientation to the nearest quarter-turn-aligned one, clearing
/// accumulated floating-point drift.
pub fn snap_rotation(rotation: Quat) -> Quat {
    let (mut x, mut y, mut z) = rotation.to_euler(EulerRot::XYZ);
    for angle in [&mut x, &mut y, &mut z] {
        *angle = (*angle / FRAC_PI_2).round() * FRAC_PI_2;
        if angle.abs() < SNAP_EPSILON {
            *angle = 0.0;
        }
    }
    Quat::from_euler(EulerRot::XYZ, x, y, z)
}

/// Starts the next requested turn, unless one is already in flight.
/// Requests arriving while a turn animates are dropped.
pub fn begin_turn(
    mut commands: Commands,
    mut requests: MessageReader<TurnCommand>,
    mut turn_state: ResMut<TurnState>,
    time: Res<Time>,
    cubies: Query<(Entity, &Transform), With<Cubie>>,
) {
    for request in requests.read() {
        if turn_state.is_animating() {
            continue;
        }

        let layer: Vec<Entity> = cubies
            .iter()
            .filter(|(_, transform)| in_layer(transform.translation, request.axis, request.index))
            .map(|(entity, _)| entity)
            .collect();
        if layer.is_empty() {
            warn!(
                "turn request selected no cubies (axis {:?}, index {})",
                request.axis, request.index
            );
            continue;
        }

        // The pivot sits at the origin with identity transform, so
        // reparenting leaves every cubie's local transform unchanged.
        let pivot = commands
            .spawn((
                Transform::default(),
                Visibility::default(),
                TurnPivot,
                crate::utils::objects::CubeEntity,
            ))
            .id();
        for entity in &layer {
            commands.entity(*entity).insert(ChildOf(pivot));
        }

        turn_state.active = Some(ActiveTurn {
            axis: request.axis,
            clockwise: request.clockwise,
            duration: request.duration,
            started: time.elapsed(),
            pivot,
            cubies: layer,
        });
    }
}

/// Drives the pivot through the quarter turn and, on completion, bakes the
/// rotation into each cubie, snaps it to the grid, and tears the pivot down.
pub fn animate_turn(
    mut commands: Commands,
    mut turn_state: ResMut<TurnState>,
    time: Res<Time>,
    mut pivots: Query<&mut Transform, With<TurnPivot>>,
    mut cubies: Query<&mut Transform, (With<Cubie>, Without<TurnPivot>)>,
) {
    let Some(active) = &turn_state.active else {
        return;
    };

    let elapsed = (time.elapsed() - active.started).as_secs_f32();
    let progress = (elapsed / active.duration).clamp(0.0, 1.0);

    let Ok(mut pivot_transform) = pivots.get_mut(active.pivot) else {
        // The pivot was despawned externally (navigation); forget the turn.
        turn_state.active = None;
        return;
    };

    if progress < 1.0 {
        pivot_transform.rotation = turn_quat(active.axis, active.clockwise, progress);
        return;
    }

    let full = turn_quat(active.axis, active.clockwise, 1.0);
    for entity in &active.cubies {
        if let Ok(mut transform) = cubies.get_mut(*entity) {
            transform.translation = snap_translation(full * transform.translation);
            transform.rotation = snap_rotation(full * transform.rotation);
        }
        commands.entity(*entity).remove::<ChildOf>();
    }
    commands.entity(active.pivot).despawn();
    turn_state.active = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_quat_close(a: Quat, b: Quat) {
        assert!(
            a.angle_between(b) < 1e-3,
            "quaternions differ: {a:?} vs {b:?}"
        );
    }

    #[test]
    fn clockwise_turns_are_negative_quarter_turns() {
        assert!((turn_angle(true) + FRAC_PI_2).abs() < 1e-6);
        assert!((turn_angle(false) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn layer_selection_rounds_drifted_coordinates() {
        assert!(in_layer(Vec3::new(0.9997, -1.0, 0.0), Axis::X, 1));
        assert!(in_layer(Vec3::new(-1.0002, 0.0, 1.0), Axis::X, -1));
        assert!(in_layer(Vec3::new(1.0, 0.0003, -1.0), Axis::Y, 0));
        assert!(!in_layer(Vec3::new(1.0, 1.0, 1.0), Axis::Z, -1));
    }

    #[test]
    fn nine_cubies_share_each_outer_layer() {
        let mut count = 0;
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    let p = Vec3::new(x as f32, y as f32, z as f32);
                    if in_layer(p, Axis::Y, 1) {
                        count += 1;
                    }
                }
            }
        }
        assert_eq!(count, 9);
    }

    #[test]
    fn snapped_translations_land_on_the_grid() {
        let snapped = snap_translation(Vec3::new(0.99995, -1.0004, 0.0001));
        assert_eq!(snapped, Vec3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn a_full_turn_maps_corners_onto_the_grid() {
        let corner = Vec3::new(1.0, 1.0, 1.0);
        let turned = snap_translation(turn_quat(Axis::Y, true, 1.0) * corner);
        // Clockwise about +Y: (1,1,1) -> (-1,1,1) under a -90 degree turn.
        assert_eq!(turned, Vec3::new(-1.0, 1.0, 1.0));
    }

    #[test]
    fn snap_clears_small_rotation_drift() {
        let drifted = Quat::from_rotation_y(FRAC_PI_2 + 0.002);
        assert_quat_close(snap_rotation(drifted), Quat::from_rotation_y(FRAC_PI_2));

        let nearly_identity = Quat::from_rotation_x(1e-5);
        assert_quat_close(snap_rotation(nearly_identity), Quat::IDENTITY);
    }

    #[test]
    fn snap_is_idempotent_after_composed_turns() {
        let mut q = Quat::IDENTITY;
        for (axis, cw) in [
            (Axis::X, true),
            (Axis::Y, false),
            (Axis::Z, true),
            (Axis::X, false),
            (Axis::Y, true),
        ] {
            q = turn_quat(axis, cw, 1.0) * q;
        }
        let once = snap_rotation(q);
        let twice = snap_rotation(once);
        assert_quat_close(once, twice);
        // And the composition of exact quarter turns snaps onto itself.
        assert_quat_close(once, q);
    }

    #[test]
    fn halfway_progress_is_half_the_quarter_turn() {
        let half = turn_quat(Axis::Z, false, 0.5);
        let (axis, angle) = half.to_axis_angle();
        assert!((axis - Vec3::Z).length() < 1e-5);
        assert!((angle - FRAC_PI_2 / 2.0).abs() < 1e-5);
    }
}
