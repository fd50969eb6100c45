pub mod asset_management;
pub mod audio_management;
pub mod routing;
