//! Map widget state and pointer handling

use super::geometry::{card_anchor, Point, Size};
use super::projection::Projection;
use crate::config::MapConfig;
use crate::data::{KeyValueStore, Level, RegionId, ScoreMap, ScoreStore};
use crate::MapError;

/// What a pointer event landed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    Region(RegionId), // A named shape of the map graphic
    Card,             // Inside the level picker card
    Background,       // Anything else
}

/// The region whose level card is open
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub region: RegionId,
    pub anchor: Point,
}

/// The map widget: scores, their projection and the open card
pub struct MapWidget<S> {
    store: ScoreStore<S>,
    config: MapConfig,
    scores: ScoreMap,
    projection: Projection,
    selection: Option<Selection>,
}

impl<S: KeyValueStore> MapWidget<S> {
    /// Load saved scores from `backend`
    pub fn new(backend: S, config: MapConfig) -> Self {
        let store = ScoreStore::new(backend, config.storage_key.clone());
        let scores = store.load();
        let projection = Projection::of(&scores);
        Self {
            store,
            config,
            scores,
            projection,
            selection: None,
        }
    }

    pub fn scores(&self) -> &ScoreMap {
        &self.scores
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn store(&self) -> &ScoreStore<S> {
        &self.store
    }

    /// Running total as displayed
    pub fn total_text(&self) -> String {
        self.config.total_text(self.projection.total)
    }

    /// Select a clicked region, or dismiss the card on a background click
    pub fn click(&mut self, target: PointerTarget, pointer: Point, viewport: Size) {
        match target {
            PointerTarget::Region(region) => {
                let anchor = card_anchor(
                    pointer,
                    self.config.card_size,
                    viewport,
                    self.config.edge_margin,
                );
                log::debug!("selected {} at ({}, {})", region, anchor.x, anchor.y);
                self.selection = Some(Selection { region, anchor });
            }
            PointerTarget::Background => {
                self.selection = None;
            }
            PointerTarget::Card => {}
        }
    }

    /// Give the selected region `level` and close the card
    ///
    /// Does nothing when no region is selected. On a storage failure the
    /// card still closes and the scores are left as they were.
    pub fn pick_level(&mut self, level: Level) -> Result<(), MapError> {
        let Some(selection) = self.selection.take() else {
            return Ok(());
        };
        let scores = self.store.assign(&self.scores, selection.region, level)?;
        self.set_scores(scores);
        Ok(())
    }

    /// Set every scored region back to "never been"
    pub fn reset(&mut self) -> Result<(), MapError> {
        let scores = self.store.reset_all(&self.scores)?;
        self.set_scores(scores);
        Ok(())
    }

    /// Re-read the scores from storage, e.g. after another tab wrote them
    pub fn reload(&mut self) {
        let scores = self.store.load();
        self.set_scores(scores);
    }

    fn set_scores(&mut self, scores: ScoreMap) {
        self.projection = Projection::of(&scores);
        self.scores = scores;
    }
}
