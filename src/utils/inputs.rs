//! Keyboard input: face-turn bindings and the display-mode toggle.

use bevy::prelude::*;
use bevy::window::{
    CursorGrabMode, CursorOptions, MonitorSelection, PrimaryWindow, VideoModeSelection, WindowMode,
};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::utils::config::CubeSettings;
use crate::utils::objects::{Axis, ScreenState, TurnCommand};

pub struct InputsPlugin;

impl Plugin for InputsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (handle_turn_keys, handle_display_keys));
    }
}

/// Face-turn bindings: one face letter key per outer layer.
const TURN_KEYS: [(KeyCode, Axis, i32); 6] = [
    (KeyCode::KeyR, Axis::X, 1),
    (KeyCode::KeyL, Axis::X, -1),
    (KeyCode::KeyU, Axis::Y, 1),
    (KeyCode::KeyD, Axis::Y, -1),
    (KeyCode::KeyF, Axis::Z, 1),
    (KeyCode::KeyB, Axis::Z, -1),
];

/// R/L/U/D/F/B request a quarter turn; Shift reverses the direction.
pub fn handle_turn_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    screen_state: Res<ScreenState>,
    settings: Res<CubeSettings>,
    mut turns: MessageWriter<TurnCommand>,
) {
    if !screen_state.screen.is_interactive() {
        return;
    }

    let counter_clockwise =
        keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    for (key, axis, index) in TURN_KEYS {
        if keyboard.just_pressed(key) {
            turns.write(TurnCommand {
                axis,
                index,
                clockwise: !counter_clockwise,
                duration: settings.turn_secs,
            });
        }
    }
}

/// Atomic index to cycle different display and cursor modes
static DISPLAY_RING_IDX: AtomicUsize = AtomicUsize::new(0);

/// Cycle between windowed and fullscreen/locked cursor modes (ESC)
pub fn toggle_display_cursor_mode_ring(window: &mut Window, cursor: &mut CursorOptions) {
    let next = (DISPLAY_RING_IDX.fetch_add(1, Ordering::SeqCst) + 1) % 2;
    DISPLAY_RING_IDX.store(next, Ordering::SeqCst);

    let (mode, grab, visible) = match next {
        1 => (WindowMode::Windowed, CursorGrabMode::None, true),
        0 => (
            WindowMode::Fullscreen(MonitorSelection::Current, VideoModeSelection::Current),
            CursorGrabMode::None,
            true,
        ),
        _ => unreachable!(),
    };

    #[cfg(not(target_arch = "wasm32"))]
    {
        window.mode = mode;
    }

    cursor.grab_mode = grab;
    cursor.visible = visible;
}

/// Handles ESC to toggle display modes. The cursor stays visible in both,
/// since the demo is mouse driven.
pub fn handle_display_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut cursor: Query<&mut CursorOptions>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        let Ok(mut window) = windows.single_mut() else {
            return;
        };
        let Ok(mut cursor) = cursor.single_mut() else {
            return;
        };
        toggle_display_cursor_mode_ring(&mut window, &mut cursor);
    }
}
