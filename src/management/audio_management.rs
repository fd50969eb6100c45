use bevy::prelude::*;
use bevy_kira_audio::{AudioApp, AudioChannel, AudioControl};
use crate::event_system::walker_events::TransitionStarted;
use crate::event_system::walker_plugin::WalkerSet;
use crate::management::asset_management::MapAssets;

#[derive(Resource)]
pub struct SoundEffects;

// Requires bevy_kira_audio's AudioPlugin to be added by the host.
pub struct AudioManagement;

impl Plugin for AudioManagement {
    fn build(&self, app: &mut App) {
        app.add_audio_channel::<SoundEffects>()
            .add_systems(Update, move_cue_listener.after(WalkerSet));
    }
}

// Fire and forget: the transition never waits on, or hears back from, playback.
pub fn move_cue_listener(
    mut reader: EventReader<TransitionStarted>,
    sfx: Res<AudioChannel<SoundEffects>>,
    assets: Option<Res<MapAssets>>,
) {
    for event in reader.read() {
        match assets.as_ref() {
            Some(assets) => {
                sfx.play(assets.move_sound.clone());
            }
            None => debug!("[Audio] no move sound loaded; skipping cue for {} -> {}", event.from, event.to),
        }
    }
}
