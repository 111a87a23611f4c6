use bevy::prelude::*;
use bevy::window::WindowResolution;
use polydrift::config::{load_world_config, CONFIG_PATH};
use polydrift::simulation::SimulationPlugin;

fn main() {
    // Loaded before the app is built so the window matches the world bounds.
    let config = load_world_config(CONFIG_PATH);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Random Polygons".into(),
                resolution: WindowResolution::new(config.width as u32, config.height as u32),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(config)
        .add_plugins(SimulationPlugin)
        .run();
}
