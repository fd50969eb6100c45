pub mod adventure_error;
pub mod adventure_plugin;
pub mod avatar;
pub mod config;
pub mod walker;
pub mod waypoint;
