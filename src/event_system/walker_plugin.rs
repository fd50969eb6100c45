use bevy::prelude::*;
use crate::core::config::WalkerTiming;
use crate::core::walker::WaypointWalker;
use crate::core::waypoint::WaypointTable;
use crate::event_system::event_listeners::*;
use crate::event_system::walker_events::*;
use crate::management::routing::{AdventureScreen, MapEntry};
use crate::spawning::helpers::despawn_screen;

/// Map logic in frame order: entry sync, timers, then player input.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalkerSet;

pub struct WalkerPlugin {
    pub table: WaypointTable,
    pub timing: WalkerTiming,
}

impl Plugin for WalkerPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AdventureScreen>();
        app.insert_resource(self.table.clone())
            .insert_resource(self.timing.validated())
            .init_resource::<MapEntry>();

        app.register_type::<WaypointWalker>()
            .register_type::<WaypointTable>()
            .register_type::<WalkerTiming>()
            .register_type::<MapEntry>();

        app.add_event::<AdvanceRequested>()
            .add_event::<TransitionStarted>()
            .add_event::<WaypointReached>()
            .add_event::<JourneyComplete>();

        // Presses made before the map existed must not start its first transition.
        app.add_systems(OnEnter(AdventureScreen::Map), (discard_pending_advances, spawn_map_screen));
        app.add_systems(OnExit(AdventureScreen::Map), despawn_screen::<MapScreen>);

        // Ticking before input means a press never moves the avatar in the same frame.
        app.add_systems(Update, (
            sync_map_entry,
            tick_walkers,
            advance_listener,
        ).chain().in_set(WalkerSet).run_if(in_state(AdventureScreen::Map)));
    }
}
