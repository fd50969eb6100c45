use bevy::prelude::*;
use crate::core::adventure_error::AdventureError;
use crate::core::config::WalkerTiming;
use crate::core::walker::{Advance, WalkerSignal, WaypointWalker};
use crate::core::waypoint::WaypointTable;
use crate::event_system::walker_events::*;
use crate::management::routing::MapEntry;

// Root of the map screen; owns the walker and, through it, the running timers.
#[derive(Component)]
pub struct MapScreen;

// An entry pointing past the table is an integration bug upstream; stop rather than clamp.
fn fail_fast<T>(error: AdventureError) -> T {
    error!("[Map] {}", error);
    panic!("{}", error);
}

pub fn discard_pending_advances(mut requests: ResMut<Events<AdvanceRequested>>) {
    requests.clear();
}

pub fn spawn_map_screen(
    mut commands: Commands,
    table: Res<WaypointTable>,
    entry: Res<MapEntry>,
) {
    let walker = WaypointWalker::at(&table, entry.start_index).unwrap_or_else(fail_fast);

    commands
        .spawn_empty()
        .insert(Name::new("MapScreen"))
        .insert(MapScreen)
        .insert(walker);
}

pub fn sync_map_entry(
    entry: Res<MapEntry>,
    table: Res<WaypointTable>,
    mut walkers: Query<&mut WaypointWalker>,
) {
    if !entry.is_changed() {
        return;
    }

    for mut walker in walkers.iter_mut() {
        if walker.in_flight() {
            debug!("[Map] re-initialization cancels the transition from {}", walker.current_index());
        }
        walker.reinitialize(&table, entry.start_index).unwrap_or_else(fail_fast);
        debug!("[Map] walker ready at {}", entry.start_index);
    }
}

pub fn tick_walkers(
    time: Res<Time>,
    table: Res<WaypointTable>,
    timing: Res<WalkerTiming>,
    entry: Res<MapEntry>,
    mut walkers: Query<&mut WaypointWalker>,
    mut reached: EventWriter<WaypointReached>,
) {
    for mut walker in walkers.iter_mut() {
        // Leave idle walkers untouched so the view only refreshes on real changes.
        if !walker.in_flight() {
            continue;
        }

        match walker.tick(time.delta(), &timing) {
            Some(WalkerSignal::Arrived { index }) => info!("[Map] arrived at {}", index),
            Some(WalkerSignal::Reached { index }) => {
                let waypoint_name = table.get(index).map(|w| w.name.clone()).unwrap_or_default();
                info!("[Map] waypoint reached: {} ({})", index, waypoint_name);
                reached.send(WaypointReached {
                    difficulty: entry.difficulty.clone(),
                    new_index: index,
                    avatar: entry.avatar,
                    waypoint_name,
                });
            }
            None => {}
        }
    }
}

pub fn advance_listener(
    mut reader: EventReader<AdvanceRequested>,
    table: Res<WaypointTable>,
    timing: Res<WalkerTiming>,
    mut walkers: Query<&mut WaypointWalker>,
    mut started: EventWriter<TransitionStarted>,
    mut complete: EventWriter<JourneyComplete>,
) {
    for _ in reader.read() {
        for mut walker in walkers.iter_mut() {
            // An ignored press leaves the walker untouched, so don't flag it as changed.
            let outcome = walker.bypass_change_detection().advance(&table, &timing);
            if outcome != Advance::Ignored {
                walker.set_changed();
            }

            match outcome {
                Advance::Departed { from, to } => {
                    info!("[Map] departing {} -> {}", from, to);
                    started.send(TransitionStarted { from, to });
                }
                Advance::JourneyComplete => {
                    info!("[Map] journey complete at {}", walker.current_index());
                    complete.send(JourneyComplete);
                }
                Advance::Ignored => debug!("[Map] advance ignored, walker busy at {}", walker.current_index()),
            }
        }
    }
}
