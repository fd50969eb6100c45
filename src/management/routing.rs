use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::core::avatar::{AvatarChoice, Difficulty};
use crate::event_system::walker_events::{JourneyComplete, WaypointReached};
use crate::event_system::walker_plugin::WalkerSet;

#[derive(States, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum AdventureScreen {
    #[default]
    Loading,
    Map,
    Completion,
}

/// Navigation state handed to the map when it is (re)entered.
///
/// Any change to this resource re-initializes the walker at `start_index`.
#[derive(Resource, Serialize, Deserialize, Reflect, Debug, Clone, PartialEq, Default)]
#[reflect(Resource)]
#[serde(default)]
pub struct MapEntry {
    pub start_index: usize,
    pub avatar: AvatarChoice,
    pub difficulty: Difficulty,
    // Name of the waypoint the player last arrived at, for display by whoever reads the entry.
    pub location: Option<String>,
}

pub struct RoutingPlugin;

impl Plugin for RoutingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (route_waypoint_reached, route_journey_complete).after(WalkerSet))
            .add_systems(OnEnter(AdventureScreen::Map), log_screen_entered)
            .add_systems(OnEnter(AdventureScreen::Completion), log_screen_entered);
    }
}

pub fn route_waypoint_reached(
    mut reader: EventReader<WaypointReached>,
    mut entry: ResMut<MapEntry>,
) {
    for event in reader.read() {
        info!("[Route] Map -> Map at {} ({})", event.new_index, event.waypoint_name);
        *entry = MapEntry {
            start_index: event.new_index,
            avatar: event.avatar,
            difficulty: event.difficulty.clone(),
            location: Some(event.waypoint_name.clone()),
        };
    }
}

pub fn route_journey_complete(
    mut reader: EventReader<JourneyComplete>,
    mut next: ResMut<NextState<AdventureScreen>>,
) {
    if reader.read().count() > 0 {
        info!("[Route] Map -> Completion");
        next.set(AdventureScreen::Completion);
    }
}

fn log_screen_entered(state: Res<State<AdventureScreen>>, entry: Res<MapEntry>) {
    info!(
        "[Route] entered {:?} (avatar {:?}, difficulty {}, step {})",
        state.get(),
        entry.avatar,
        entry.difficulty,
        entry.start_index
    );
}
