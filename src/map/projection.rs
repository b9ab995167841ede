//! Recolour and running total, derived from the score map
//!
//! A [`Projection`] is rebuilt from scratch after every change to the scores
//! and then applied to whatever draws the map.

use crate::data::{RegionId, ScoreMap};
use std::collections::HashMap;

/// Something that can fill regions of the map graphic
pub trait RegionCanvas {
    /// Set the fill of `region`; unknown regions are ignored
    fn set_fill(&mut self, region: &RegionId, color: &str);
}

/// Shapes of the map graphic grouped by region name
///
/// A region may be drawn as several shapes sharing one name; all of them
/// belong to the region.
#[derive(Debug, Clone)]
pub struct RegionShapes<T> {
    shapes: HashMap<RegionId, Vec<T>>,
}

impl<T> RegionShapes<T> {
    /// Every shape drawn for `region`, in document order
    pub fn of(&self, region: &RegionId) -> &[T] {
        self.shapes.get(region).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct regions
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<T> FromIterator<(RegionId, T)> for RegionShapes<T> {
    fn from_iter<I: IntoIterator<Item = (RegionId, T)>>(iter: I) -> Self {
        let mut shapes: HashMap<RegionId, Vec<T>> = HashMap::new();
        for (region, shape) in iter {
            shapes.entry(region).or_default().push(shape);
        }
        Self { shapes }
    }
}

/// Display state derived from a score map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub fills: Vec<(RegionId, &'static str)>,
    pub total: u32,
}

impl Projection {
    pub fn of(scores: &ScoreMap) -> Self {
        Self {
            fills: scores
                .iter()
                .map(|(region, level)| (region.clone(), level.color()))
                .collect(),
            total: scores.total(),
        }
    }

    pub fn apply(&self, canvas: &mut impl RegionCanvas) {
        for (region, color) in &self.fills {
            canvas.set_fill(region, color);
        }
    }
}
