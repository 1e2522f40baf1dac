//! Start-up for Hello Cube: window, plugins, and resources.

use bevy::prelude::*;
use bevy::window::PresentMode;

use hello_cube::plugins::hello_cube::HelloCubePlugin;
use hello_cube::utils::config::load_settings;
use hello_cube::utils::constants::demo_constants::SETTINGS_PATH;
use hello_cube::utils::objects::RandomGen;

/// Entry point for the application
fn main() {
    let settings = match load_settings(SETTINGS_PATH) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("ignoring {SETTINGS_PATH}: {e}");
            Default::default()
        }
    };

    let window = Some(Window {
        title: "Hello Cube".into(),
        #[cfg(target_arch = "wasm32")]
        canvas: Some("#cube-canvas".into()),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: true,
        present_mode: PresentMode::AutoVsync,
        ..default()
    });

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: window,
                ..default()
            }),
            HelloCubePlugin,
        ))
        .insert_resource(RandomGen::from_seed(settings.cube.seed))
        .insert_resource(settings.cube)
        .run();
}
