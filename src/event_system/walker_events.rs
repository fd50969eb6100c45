use bevy::prelude::*;
use crate::core::avatar::{AvatarChoice, Difficulty};

// Player asked the avatar to move on (button, key).
#[derive(Debug, Clone, Default, Event)]
pub struct AdvanceRequested;

#[derive(Debug, Clone, Event)]
pub struct TransitionStarted {
    pub from: usize,
    pub to: usize,
}

/// Sent once the post-arrival delay has elapsed. The router is expected to
/// bring the map back at `new_index` with the same avatar and difficulty.
#[derive(Debug, Clone, PartialEq, Event)]
pub struct WaypointReached {
    pub difficulty: Difficulty,
    pub new_index: usize,
    pub avatar: AvatarChoice,
    pub waypoint_name: String,
}

#[derive(Debug, Clone, Default, Event)]
pub struct JourneyComplete;
