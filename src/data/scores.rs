//! The score map: region identifier to level

use super::{Level, RegionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Levels the user has picked, keyed by region
///
/// A region without an entry displays as [`Level::NeverBeen`]; entries are
/// only written when the user picks a level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMap(BTreeMap<RegionId, Level>);

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, region: &RegionId) -> Option<Level> {
        self.0.get(region).copied()
    }

    /// Level shown for a region, `NeverBeen` when unseen
    pub fn level_of(&self, region: &RegionId) -> Level {
        self.get(region).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RegionId, Level)> {
        self.0.iter().map(|(region, level)| (region, *level))
    }

    /// Copy of this map with `region` bound to `level`
    pub fn with_level(&self, region: RegionId, level: Level) -> Self {
        let mut next = self.0.clone();
        next.insert(region, level);
        Self(next)
    }

    /// Copy of this map with every existing entry set to `NeverBeen`
    pub fn zeroed(&self) -> Self {
        Self(
            self.0
                .keys()
                .map(|region| (region.clone(), Level::NeverBeen))
                .collect(),
        )
    }

    /// Sum of all levels
    pub fn total(&self) -> u32 {
        self.0.values().map(|level| u32::from(level.value())).sum()
    }
}

impl FromIterator<(RegionId, Level)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (RegionId, Level)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
