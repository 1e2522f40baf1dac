//! Persistent orbit camera: drag to orbit, wheel to zoom, and a slow idle
//! spin on the landing screen.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::utils::constants::camera_constants::{
    CAMERA_DRAG_SENSITIVITY, CAMERA_FOV_DEGREES, CAMERA_IDLE_SPIN_SPEED, CAMERA_INITIAL_POS,
    CAMERA_MAX_RADIUS, CAMERA_MIN_RADIUS, CAMERA_PITCH_LIMIT, CAMERA_PIXELS_PER_LINE,
    CAMERA_ZOOM_STEP,
};
use crate::utils::objects::{Screen, ScreenState};

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitCamera>()
            .add_systems(Startup, spawn_persistent_camera)
            .add_systems(
                Update,
                (orbit_on_drag, zoom_on_wheel, idle_spin, apply_orbit).chain(),
            );
    }
}

/// Spherical orbit state around the origin.
#[derive(Resource, Clone, Copy, Debug)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let (yaw, pitch, radius) = orbit_from_position(CAMERA_INITIAL_POS);
        Self { yaw, pitch, radius }
    }
}

/// Decompose an eye position into yaw, pitch, and radius about the origin.
pub fn orbit_from_position(position: Vec3) -> (f32, f32, f32) {
    let radius = position.length();
    let pitch = (position.y / radius).asin();
    let yaw = position.x.atan2(position.z);
    (yaw, pitch, radius)
}

/// The eye position for a given orbit state.
pub fn position_from_orbit(yaw: f32, pitch: f32, radius: f32) -> Vec3 {
    Vec3::new(
        radius * pitch.cos() * yaw.sin(),
        radius * pitch.sin(),
        radius * pitch.cos() * yaw.cos(),
    )
}

/// This camera persists across screens; navigation only resets the orbit.
#[derive(Component)]
pub struct PersistentCamera;

fn spawn_persistent_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(CAMERA_INITIAL_POS).looking_at(Vec3::ZERO, Vec3::Y),
        PersistentCamera,
    ));
}

/// Dragging with the left button orbits the cube.
pub fn orbit_on_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if !buttons.pressed(MouseButton::Left) {
        mouse_motion.clear();
        return;
    }
    for event in mouse_motion.read() {
        orbit.yaw -= event.delta.x * CAMERA_DRAG_SENSITIVITY;
        orbit.pitch = (orbit.pitch + event.delta.y * CAMERA_DRAG_SENSITIVITY)
            .clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }
}

/// Scrolling zooms, with the radius clamped to a sensible range.
pub fn zoom_on_wheel(mut wheel: MessageReader<MouseWheel>, mut orbit: ResMut<OrbitCamera>) {
    for event in wheel.read() {
        let lines = match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / CAMERA_PIXELS_PER_LINE,
        };
        orbit.radius =
            (orbit.radius - lines * CAMERA_ZOOM_STEP).clamp(CAMERA_MIN_RADIUS, CAMERA_MAX_RADIUS);
    }
}

/// On the landing screen the cube spins slowly on its own.
pub fn idle_spin(screen_state: Res<ScreenState>, time: Res<Time>, mut orbit: ResMut<OrbitCamera>) {
    if screen_state.screen == Screen::Home {
        orbit.yaw += CAMERA_IDLE_SPIN_SPEED * time.delta_secs();
    }
}

pub fn apply_orbit(
    orbit: Res<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<PersistentCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    transform.translation = position_from_orbit(orbit.yaw, orbit.pitch, orbit.radius);
    transform.look_at(Vec3::ZERO, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_decomposition_round_trips() {
        let (yaw, pitch, radius) = orbit_from_position(CAMERA_INITIAL_POS);
        let back = position_from_orbit(yaw, pitch, radius);
        assert!((back - CAMERA_INITIAL_POS).length() < 1e-4);
    }

    #[test]
    fn initial_orbit_looks_from_the_documented_eye() {
        let orbit = OrbitCamera::default();
        assert!((orbit.radius - CAMERA_INITIAL_POS.length()).abs() < 1e-4);
        assert!(orbit.pitch > 0.0, "camera starts above the cube");
    }

    #[test]
    fn positions_stay_on_the_sphere() {
        for yaw in [0.0_f32, 0.7, 2.1, -1.3] {
            for pitch in [0.0_f32, 0.4, -0.4] {
                let p = position_from_orbit(yaw, pitch, 12.0);
                assert!((p.length() - 12.0).abs() < 1e-4);
            }
        }
    }
}
