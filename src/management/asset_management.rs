use bevy::prelude::*;
use bevy_asset_loader::prelude::*;
use crate::core::avatar::AvatarChoice;
use crate::management::routing::AdventureScreen;

pub struct AssetManagement;

#[derive(AssetCollection, Resource)]
pub struct MapAssets {
    #[asset(path = "images/map.jpg")]
    pub background: Handle<Image>,
    #[asset(path = "images/hero1.png")]
    pub hero1: Handle<Image>,
    #[asset(path = "images/hero2.png")]
    pub hero2: Handle<Image>,
    #[asset(path = "images/hero3.png")]
    pub hero3: Handle<Image>,
    #[asset(path = "images/hero4.png")]
    pub hero4: Handle<Image>,
    #[asset(path = "sounds/move.mp3")]
    pub move_sound: Handle<bevy_kira_audio::AudioSource>,
    #[asset(path = "fonts/map_font.ttf")]
    pub font: Handle<Font>,
}

impl MapAssets {
    pub fn avatar(&self, choice: AvatarChoice) -> Handle<Image> {
        match choice {
            AvatarChoice::Hero1 => self.hero1.clone(),
            AvatarChoice::Hero2 => self.hero2.clone(),
            AvatarChoice::Hero3 => self.hero3.clone(),
            AvatarChoice::Hero4 => self.hero4.clone(),
        }
    }
}

impl Plugin for AssetManagement {
    fn build(&self, app: &mut App) {
        // A missing asset must not block the map; the view falls back to plain nodes.
        app.add_loading_state(
            LoadingState::new(AdventureScreen::Loading)
                .continue_to_state(AdventureScreen::Map)
                .on_failure_continue_to_state(AdventureScreen::Map)
                .load_collection::<MapAssets>(),
        );
    }
}
