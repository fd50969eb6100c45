use std::fs::File;
use std::path::Path;
use std::time::Duration;
use bevy::prelude::*;
use ron::de::from_reader;
use serde::{Deserialize, Serialize};
use crate::core::adventure_error::AdventureError;
use crate::core::waypoint::Locale;

/// How a transition between two waypoints is paced.
///
/// The avatar covers the distance in `ticks` equal steps, one every
/// `tick_interval_ms`, then waits `arrival_delay_ms` before the map hands
/// control back to the router.
#[derive(Resource, Serialize, Deserialize, Reflect, Debug, Clone, PartialEq)]
#[reflect(Resource)]
#[serde(default)]
pub struct WalkerTiming {
    pub ticks: u32,
    pub tick_interval_ms: u64,
    pub arrival_delay_ms: u64,
}

impl Default for WalkerTiming {
    fn default() -> Self {
        WalkerTiming {
            ticks: 10,
            tick_interval_ms: 100,
            arrival_delay_ms: 2000,
        }
    }
}

impl WalkerTiming {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn arrival_delay(&self) -> Duration {
        Duration::from_millis(self.arrival_delay_ms)
    }

    pub fn validate(&self) -> Result<(), AdventureError> {
        if self.ticks == 0 {
            return Err(AdventureError::InvalidTiming("a transition needs at least one tick".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(AdventureError::InvalidTiming("tick interval must be positive".into()));
        }
        Ok(())
    }

    /// This timing if it is usable, otherwise the defaults.
    pub fn validated(&self) -> WalkerTiming {
        match self.validate() {
            Ok(()) => self.clone(),
            Err(e) => {
                warn!("{}; using default timing", e);
                WalkerTiming::default()
            }
        }
    }
}

#[derive(Resource, Serialize, Deserialize, Reflect, Debug, Clone, PartialEq)]
#[reflect(Resource)]
#[serde(default)]
pub struct AdventureConfig {
    pub locale: Locale,
    pub timing: WalkerTiming,
    pub hop_offset_px: f32,
    pub avatar_width_px: f32,
}

impl Default for AdventureConfig {
    fn default() -> Self {
        AdventureConfig {
            locale: Locale::default(),
            timing: WalkerTiming::default(),
            hop_offset_px: 15.0,
            avatar_width_px: 80.0,
        }
    }
}

impl AdventureConfig {
    pub fn import(path: impl AsRef<Path>) -> Result<Self, AdventureError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| AdventureError::ImportFailed(format!("Failed to open '{}': {}", path.display(), e)))?;
        let config: AdventureConfig = from_reader(file)?;
        config.timing.validate()?;
        Ok(config)
    }

    pub fn validated(&self) -> AdventureConfig {
        AdventureConfig {
            timing: self.timing.validated(),
            ..self.clone()
        }
    }

    /// Reads the config at `path`, falling back to the defaults when it is
    /// missing or invalid.
    pub fn import_or_default(path: impl AsRef<Path>) -> Self {
        match Self::import(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default adventure config: {}", e);
                AdventureConfig::default()
            }
        }
    }
}
