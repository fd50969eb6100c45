use std::fmt;

#[derive(Debug)]
pub enum AdventureError {
    EmptyTable,
    CoordinateOutOfRange { name: String, x: f32, y: f32 },
    StartIndexOutOfRange { index: usize, len: usize },
    InvalidTiming(String),
    ImportFailed(String),
}

impl fmt::Display for AdventureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdventureError::EmptyTable => write!(f, "waypoint table has no waypoints"),
            AdventureError::CoordinateOutOfRange { name, x, y } => {
                write!(f, "waypoint '{}' at ({}, {}) lies outside the 0-100 map range", name, x, y)
            }
            AdventureError::StartIndexOutOfRange { index, len } => {
                write!(f, "start index {} is out of range for {} waypoints", index, len)
            }
            AdventureError::InvalidTiming(reason) => write!(f, "invalid walker timing: {}", reason),
            AdventureError::ImportFailed(reason) => write!(f, "import failed: {}", reason),
        }
    }
}

impl std::error::Error for AdventureError {}

impl From<ron::de::SpannedError> for AdventureError {
    fn from(error: ron::de::SpannedError) -> Self {
        AdventureError::ImportFailed(error.to_string())
    }
}
