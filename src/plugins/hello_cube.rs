use bevy::prelude::*;

use crate::utils::camera::OrbitCameraPlugin;
use crate::utils::facelets::FaceletsPlugin;
use crate::utils::inputs::InputsPlugin;
use crate::utils::painting::PaintingPlugin;
use crate::utils::scramble::ScramblePlugin;
use crate::utils::screens::ScreensPlugin;
use crate::utils::setup::SetupPlugin;
use crate::utils::turns::TurnsPlugin;
use crate::utils::typewriter::TypewriterPlugin;

/// Everything the demo adds on top of Bevy's defaults.
pub struct HelloCubePlugin;

impl Plugin for HelloCubePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SetupPlugin,
            OrbitCameraPlugin,
            ScreensPlugin,
            TurnsPlugin,
            ScramblePlugin,
            InputsPlugin,
            PaintingPlugin,
            FaceletsPlugin,
            TypewriterPlugin,
        ));
    }
}
