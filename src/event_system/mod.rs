pub mod event_listeners;
pub mod walker_events;
pub mod walker_plugin;
