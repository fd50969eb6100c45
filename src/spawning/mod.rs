pub mod completion_view;
pub mod helpers;
pub mod map_view;
pub mod view_plugin;
