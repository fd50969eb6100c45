use bevy::prelude::*;
use crate::core::config::AdventureConfig;
use crate::event_system::walker_plugin::WalkerSet;
use crate::management::routing::AdventureScreen;
use crate::spawning::completion_view::{spawn_completion_screen, CompletionScreen};
use crate::spawning::helpers::despawn_screen;
use crate::spawning::map_view::*;

// Needs bevy's UI plugins; the map logic itself runs without them.
pub struct MapViewPlugin;

impl Plugin for MapViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AdventureConfig>();

        app.add_systems(Update, advance_button_system.before(WalkerSet))
            .add_systems(Update, (spawn_map_view, update_map_view).chain().after(WalkerSet))
            .add_systems(OnEnter(AdventureScreen::Completion), spawn_completion_screen)
            .add_systems(OnExit(AdventureScreen::Completion), despawn_screen::<CompletionScreen>);
    }
}
