use std::fs::File;
use std::path::Path;
use bevy::prelude::*;
use ron::de::from_reader;
use serde::{Deserialize, Serialize};
use crate::core::adventure_error::AdventureError;

const HEBREW_TABLE: &str = include_str!("../../assets/data/waypoints.he.ron");
const ENGLISH_TABLE: &str = include_str!("../../assets/data/waypoints.en.ron");

#[derive(Serialize, Deserialize, Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Hebrew,
    English,
}

impl Locale {
    fn embedded_table(&self) -> &'static str {
        match self {
            Locale::Hebrew => HEBREW_TABLE,
            Locale::English => ENGLISH_TABLE,
        }
    }
}

// A named point on the map. Coordinates are percentages of the viewport.
#[derive(Serialize, Deserialize, Reflect, Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub message: String,
}

impl Waypoint {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Serialize, Deserialize, Reflect, Debug, Clone, PartialEq)]
pub struct MapLabels {
    pub arrival_prefix: String,
    pub advance_button: String,
    pub completion_title: String,
}

/// The ordered, immutable list of waypoints shown on the map, together with the
/// labels of the screen in the same locale.
///
/// Tables are only built through [`WaypointTable::parse`], [`WaypointTable::import`]
/// or [`WaypointTable::for_locale`], all of which validate, so a table held as a
/// resource is never empty and every coordinate lies within the map.
#[derive(Resource, Serialize, Deserialize, Reflect, Debug, Clone, PartialEq)]
#[reflect(Resource)]
pub struct WaypointTable {
    pub labels: MapLabels,
    waypoints: Vec<Waypoint>,
}

impl WaypointTable {
    pub fn parse(source: &str) -> Result<Self, AdventureError> {
        let table: WaypointTable = ron::de::from_str(source)?;
        table.validate()?;
        Ok(table)
    }

    pub fn import(path: impl AsRef<Path>) -> Result<Self, AdventureError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| AdventureError::ImportFailed(format!("Failed to open '{}': {}", path.display(), e)))?;
        let table: WaypointTable = from_reader(file)?;
        table.validate()?;
        Ok(table)
    }

    pub fn for_locale(locale: Locale) -> Result<Self, AdventureError> {
        Self::parse(locale.embedded_table())
    }

    pub fn validate(&self) -> Result<(), AdventureError> {
        if self.waypoints.is_empty() {
            return Err(AdventureError::EmptyTable);
        }

        let in_range = |v: f32| (0.0..=100.0).contains(&v);
        match self.waypoints.iter().find(|w| !in_range(w.x) || !in_range(w.y)) {
            Some(w) => Err(AdventureError::CoordinateOutOfRange { name: w.name.clone(), x: w.x, y: w.y }),
            None => Ok(()),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: &str = r#"(arrival_prefix: "", advance_button: "", completion_title: "")"#;

    #[test]
    fn hebrew_table_has_the_six_locations_in_order() {
        let table = WaypointTable::for_locale(Locale::Hebrew).unwrap();
        let positions: Vec<Vec2> = table.iter().map(Waypoint::position).collect();

        assert_eq!(positions, vec![
            Vec2::new(27.0, 35.0),
            Vec2::new(42.0, 17.0),
            Vec2::new(42.0, 43.0),
            Vec2::new(12.0, 70.0),
            Vec2::new(74.0, 57.0),
            Vec2::new(74.0, 16.0),
        ]);
        assert_eq!(table.last_index(), 5);
        assert_eq!(table.get(0).unwrap().name, "🏡 הכפר השקט");
    }

    #[test]
    fn locales_share_the_same_map() {
        let hebrew = WaypointTable::for_locale(Locale::Hebrew).unwrap();
        let english = WaypointTable::for_locale(Locale::English).unwrap();

        assert_eq!(hebrew.len(), english.len());
        for (he, en) in hebrew.iter().zip(english.iter()) {
            assert_eq!(he.position(), en.position());
        }
        assert_ne!(hebrew.labels, english.labels);
    }

    #[test]
    fn empty_table_is_rejected() {
        let source = format!("(labels: {}, waypoints: [])", LABELS);
        assert!(matches!(WaypointTable::parse(&source), Err(AdventureError::EmptyTable)));
    }

    #[test]
    fn coordinates_outside_the_map_are_rejected() {
        let source = format!(
            r#"(labels: {}, waypoints: [(name: "cliff", x: 101.0, y: 20.0, message: "")])"#,
            LABELS
        );
        match WaypointTable::parse(&source) {
            Err(AdventureError::CoordinateOutOfRange { name, x, .. }) => {
                assert_eq!(name, "cliff");
                assert_eq!(x, 101.0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn malformed_source_reports_import_failure() {
        assert!(matches!(WaypointTable::parse("(labels: "), Err(AdventureError::ImportFailed(_))));
    }

    #[test]
    fn missing_file_reports_import_failure() {
        let result = WaypointTable::import("assets/data/does_not_exist.ron");
        assert!(matches!(result, Err(AdventureError::ImportFailed(_))));
    }
}
