use std::path::PathBuf;
use bevy::prelude::*;

use crate::core::avatar::AvatarChoice;
use crate::core::config::AdventureConfig;
use crate::core::waypoint::{Locale, WaypointTable};
use crate::event_system::walker_plugin::WalkerPlugin;
use crate::management::asset_management::AssetManagement;
use crate::management::audio_management::AudioManagement;
use crate::management::routing::{MapEntry, RoutingPlugin};
use crate::spawning::view_plugin::MapViewPlugin;

/// The whole adventure map: walker logic, routing, asset loading, the move cue
/// and the UI. Expects `DefaultPlugins` and bevy_kira_audio's `AudioPlugin`.
#[derive(Default)]
pub struct AdventureMapPlugin {
    pub config: AdventureConfig,
    pub entry: MapEntry,
    pub table_override: Option<PathBuf>,
}

impl AdventureMapPlugin {
    fn waypoint_table(&self) -> WaypointTable {
        if let Some(path) = &self.table_override {
            match WaypointTable::import(path) {
                Ok(table) => return table,
                Err(e) => warn!("Falling back to the built-in {:?} waypoints: {}", self.config.locale, e),
            }
        }

        match WaypointTable::for_locale(self.config.locale) {
            Ok(table) => table,
            Err(e) => panic!("Built-in waypoint table is broken: {}", e),
        }
    }
}

impl Plugin for AdventureMapPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.validated();

        app
            .insert_resource(config.clone())
            .insert_resource(self.entry.clone())
            .add_plugins(WalkerPlugin {
                table: self.waypoint_table(),
                timing: config.timing,
            })
            .add_plugins(RoutingPlugin)
            .add_plugins(AssetManagement)
            .add_plugins(AudioManagement)
            .add_plugins(MapViewPlugin)
            .register_type::<AdventureConfig>()
            .register_type::<AvatarChoice>()
            .register_type::<Locale>();
    }
}
