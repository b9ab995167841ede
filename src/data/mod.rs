//! Data structures for the score map
//!
//! Defines levels, region identifiers, the score map and its persistence.

pub mod scores;
pub mod storage;

pub use scores::*;
pub use storage::*;

use crate::MapError;
use serde::{Deserialize, Serialize};

/// How well the user knows a region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Level {
    #[default]
    NeverBeen, // 0
    Passed,    // 1
    Stopped,   // 2
    Visited,   // 3
    Stayed,    // 4
    Lived,     // 5
}

impl Level {
    /// Card order: highest level first
    pub const ALL: [Level; 6] = [
        Level::Lived,
        Level::Stayed,
        Level::Visited,
        Level::Stopped,
        Level::Passed,
        Level::NeverBeen,
    ];

    pub fn value(&self) -> u8 {
        match self {
            Level::NeverBeen => 0,
            Level::Passed => 1,
            Level::Stopped => 2,
            Level::Visited => 3,
            Level::Stayed => 4,
            Level::Lived => 5,
        }
    }

    /// Fill colour of a region at this level
    pub fn color(&self) -> &'static str {
        crate::map::color_for(i64::from(self.value()))
    }

    /// Stable element id used by the card and the stylesheet
    pub fn slug(&self) -> &'static str {
        match self {
            Level::NeverBeen => "never-been",
            Level::Passed => "passed",
            Level::Stopped => "stopped",
            Level::Visited => "visited",
            Level::Stayed => "stayed",
            Level::Lived => "lived",
        }
    }
}

impl TryFrom<i64> for Level {
    type Error = MapError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::NeverBeen),
            1 => Ok(Level::Passed),
            2 => Ok(Level::Stopped),
            3 => Ok(Level::Visited),
            4 => Ok(Level::Stayed),
            5 => Ok(Level::Lived),
            other => Err(MapError::InvalidLevel(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.value()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::NeverBeen => write!(f, "Never been"),
            Level::Passed => write!(f, "Passed"),
            Level::Stopped => write!(f, "Stopped"),
            Level::Visited => write!(f, "Visited"),
            Level::Stayed => write!(f, "Stayed"),
            Level::Lived => write!(f, "Lived"),
        }
    }
}

/// Identifier of a region, as found in the `name` attribute of the map graphic
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub String);

impl RegionId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
