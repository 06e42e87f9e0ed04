mod audio;
mod camera;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod geometry;
mod level;
mod movement;
mod sprites;
mod ui;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::path::Path;

fn main() {
    // Window settings are needed before logging is up; ContentPlugin reloads
    // the file and reports any problems.
    let window = content::load_config(Path::new(content::DEFAULT_CONFIG_PATH))
        .map(|config| config.window)
        .unwrap_or_default();

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: window.title.clone(),
                    resolution: WindowResolution::new(window.width, window.height),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.12)))
    .add_plugins((
        content::ContentPlugin::default(),
        level::LevelPlugin,
        core::CorePlugin,
        movement::MovementPlugin,
        sprites::SpritesPlugin,
        camera::CameraPlugin,
        audio::GameAudioPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
