use bevy::app::Plugin;
use bevy::prelude::*;
use adventure_map::event_system::walker_events::AdvanceRequested;
use adventure_map::event_system::walker_plugin::WalkerSet;

const ADVANCE_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::Enter, KeyCode::ArrowRight];

pub(crate) struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_advance_system.before(WalkerSet));
    }
}

fn keyboard_advance_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut advance: EventWriter<AdvanceRequested>,
) {
    if keys.any_just_pressed(ADVANCE_KEYS) {
        advance.send(AdvanceRequested);
    }
}
