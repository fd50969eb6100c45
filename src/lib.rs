pub mod core;
pub mod event_system;
pub mod management;
pub mod spawning;
