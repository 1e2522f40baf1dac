//! Optional `settings.toml` configuration for timings and the scramble RNG.

use bevy::prelude::Resource;
use serde::Deserialize;
use snafu::Snafu;

use crate::utils::constants::cube_constants::{
    SCRAMBLE_GAP_SECS, SCRAMBLE_MOVES, SCRAMBLE_TURN_SECS, TURN_SECS,
};
use crate::utils::constants::demo_constants::SEED;

#[derive(Debug, Snafu)]
pub enum ConfigError {
    #[snafu(display("IO error reading settings: {source}"))]
    Io { source: std::io::Error },

    #[snafu(display("TOML parse error in settings: {source}"))]
    Parse { source: toml::de::Error },
}

/// Top-level settings file shape.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub cube: CubeSettings,
}

/// Cube timing and scramble settings, all optional in the file.
#[derive(Debug, Clone, Deserialize, Resource)]
pub struct CubeSettings {
    /// Keyboard turn duration in seconds.
    #[serde(default = "default_turn_secs")]
    pub turn_secs: f32,
    /// Scramble turn duration in seconds.
    #[serde(default = "default_scramble_turn_secs")]
    pub scramble_turn_secs: f32,
    /// Gap between dispatched scramble moves in seconds.
    #[serde(default = "default_scramble_gap_secs")]
    pub scramble_gap_secs: f32,
    /// Number of moves per scramble.
    #[serde(default = "default_scramble_moves")]
    pub scramble_moves: usize,
    /// Seed for the scramble RNG.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_turn_secs() -> f32 {
    TURN_SECS
}

fn default_scramble_turn_secs() -> f32 {
    SCRAMBLE_TURN_SECS
}

fn default_scramble_gap_secs() -> f32 {
    SCRAMBLE_GAP_SECS
}

fn default_scramble_moves() -> usize {
    SCRAMBLE_MOVES
}

fn default_seed() -> u64 {
    SEED
}

impl Default for CubeSettings {
    fn default() -> Self {
        Self {
            turn_secs: default_turn_secs(),
            scramble_turn_secs: default_scramble_turn_secs(),
            scramble_gap_secs: default_scramble_gap_secs(),
            scramble_moves: default_scramble_moves(),
            seed: default_seed(),
        }
    }
}

pub fn parse_settings(text: &str) -> Result<Settings, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse { source })
}

/// Load settings from `path`. A missing file yields defaults; any other
/// failure is an error for the caller to report.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings(path: &str) -> Result<Settings, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(text) => parse_settings(&text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(source) => Err(ConfigError::Io { source }),
    }
}

/// There is no filesystem to read on the web; always use defaults.
#[cfg(target_arch = "wasm32")]
pub fn load_settings(_path: &str) -> Result<Settings, ConfigError> {
    Ok(Settings::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings.cube.scramble_moves, SCRAMBLE_MOVES);
        assert_eq!(settings.cube.seed, SEED);
        assert!((settings.cube.turn_secs - TURN_SECS).abs() < 1e-6);
    }

    #[test]
    fn partial_cube_table_keeps_other_defaults() {
        let settings = parse_settings("[cube]\nscramble_moves = 40\nseed = 7\n").unwrap();
        assert_eq!(settings.cube.scramble_moves, 40);
        assert_eq!(settings.cube.seed, 7);
        assert!((settings.cube.scramble_turn_secs - SCRAMBLE_TURN_SECS).abs() < 1e-6);
        assert!((settings.cube.scramble_gap_secs - SCRAMBLE_GAP_SECS).abs() < 1e-6);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = parse_settings("[cube\nturn_secs = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
