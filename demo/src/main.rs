use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use bevy_kira_audio::AudioPlugin;
use adventure_map::core::adventure_plugin::AdventureMapPlugin;
use adventure_map::core::config::AdventureConfig;

mod input_manager;

fn main() {
    let mut app = App::new();

    // Setup default plugins
    app.add_plugins(
        DefaultPlugins
            .set(bevy::log::LogPlugin {
                filter: "warn,adventure_map=info".to_string(),
                level: bevy::log::Level::INFO,
                ..default()
            })
            // Map data and media live in the library's asset folder
            .set(AssetPlugin {
                file_path: "../assets".to_string(),
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Adventure Map".into(),
                    resolution: (1024.0, 768.0).into(),
                    ..default()
                }),
                ..default()
            })
            .build(),
    );

    // Setup inspector plugins
    app.add_plugins(
        WorldInspectorPlugin::default().run_if(bevy::input::common_conditions::input_toggle_active(false, KeyCode::Escape)),
    );

    // Setup audio; the map registers its own effects channel
    app.add_plugins(AudioPlugin);

    app.add_systems(Startup, spawn_camera);

    // Setup the map screen
    app.add_plugins(AdventureMapPlugin {
        config: AdventureConfig::import_or_default(concat!(env!("CARGO_MANIFEST_DIR"), "/../assets/data/adventure.ron")),
        ..default()
    });

    // Setup input system
    app.add_plugins(crate::input_manager::InputPlugin);

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("MainCamera")));
}
