use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AvatarChoice {
    #[default]
    Hero1,
    Hero2,
    Hero3,
    Hero4,
}

// Opaque difficulty tag; the map never interprets it, only passes it on.
#[derive(Serialize, Deserialize, Reflect, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Difficulty(pub String);

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty("easy".to_string())
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
