// Constants used by the demo, structured into modules.

/// 3D camera
pub mod camera_constants {
    use bevy::prelude::Vec3;

    // Starting eye position, looking at the origin.
    pub const CAMERA_INITIAL_POS: Vec3 = Vec3::new(5.0, 5.0, 10.0);

    pub const CAMERA_FOV_DEGREES: f32 = 40.0;

    // Radius range for the camera's orbit.
    pub const CAMERA_MIN_RADIUS: f32 = 5.0;
    pub const CAMERA_MAX_RADIUS: f32 = 20.0;

    // Orbit sensitivity per pixel of mouse drag (radians).
    pub const CAMERA_DRAG_SENSITIVITY: f32 = 0.005;

    // Zoom step per scroll line; pixel deltas are scaled down to lines.
    pub const CAMERA_ZOOM_STEP: f32 = 0.8;
    pub const CAMERA_PIXELS_PER_LINE: f32 = 100.0;

    // Keep the pitch away from the poles so look_at stays well defined.
    pub const CAMERA_PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

    // Idle spin of the cube on the landing screen (radians per second).
    pub const CAMERA_IDLE_SPIN_SPEED: f32 = 0.4;
}

/// Cube geometry and turn animation
pub mod cube_constants {
    // Exactly one unit between cubie centres.
    pub const CUBIE_SPACING: f32 = 1.0;
    pub const CUBIE_SIZE: f32 = 1.0;

    pub const STICKER_SIZE: f32 = 0.9;
    // Stickers sit just off the cubie surface to avoid z-fighting.
    pub const STICKER_OFFSET: f32 = 0.51;

    pub const STICKER_METALLIC: f32 = 0.3;
    pub const STICKER_ROUGHNESS: f32 = 0.2;

    // Drop orientation residue below this after snapping.
    pub const SNAP_EPSILON: f32 = 1e-4;

    pub const TURN_SECS: f32 = 0.2;
    pub const SCRAMBLE_TURN_SECS: f32 = 0.15;
    pub const SCRAMBLE_GAP_SECS: f32 = 0.2;
    pub const SCRAMBLE_MOVES: usize = 25;

    // A click that drags further than this is an orbit, not a repaint.
    pub const TAP_MAX_DISTANCE: f32 = 5.0;
}

/// Lighting
pub mod light_constants {
    use bevy::prelude::Vec3;

    pub const DIRECTIONAL_LIGHT_POS: Vec3 = Vec3::new(5.0, 10.0, 7.5);
    pub const DIRECTIONAL_LIGHT_ILLUMINANCE: f32 = 8_000.0;

    pub const AMBIENT_BRIGHTNESS: f32 = 400.0;
}

/// Generic demo constants
pub mod demo_constants {
    // Seed for the random number generator.
    pub const SEED: u64 = 69;

    // Landing headline slogans, cycled by the typewriter.
    pub const HEADLINE_WORDS: [&str; 3] = [
        "Rubik's Cube Solver",
        "Graph Algorithms in Action",
        "Solve with 3D Intuition",
    ];

    pub const TYPE_CHAR_SECS: f32 = 0.07;
    pub const DELETE_CHAR_SECS: f32 = 0.04;
    pub const HOLD_WORD_SECS: f32 = 1.8;

    pub const SETTINGS_PATH: &str = "settings.toml";
}
