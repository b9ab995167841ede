//! Durable key-value storage and the score store on top of it

use super::{Level, RegionId, ScoreMap};
use crate::MapError;
use std::cell::RefCell;
use std::collections::HashMap;

/// Slot name used when no configuration overrides it
pub const DEFAULT_STORAGE_KEY: &str = "countyScores";

/// A string key-value store, such as the browser's `localStorage`
pub trait KeyValueStore {
    /// Stored value, `None` when the key is absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), MapError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MapError> {
        (**self).set(key, value)
    }
}

/// In-process store, used natively and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one slot
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MapError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the score map under a single storage slot
#[derive(Debug)]
pub struct ScoreStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> ScoreStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Persisted scores; missing or malformed content yields an empty map
    pub fn load(&self) -> ScoreMap {
        let Some(raw) = self.backend.get(&self.key) else {
            log::debug!("no saved scores under '{}'", self.key);
            return ScoreMap::new();
        };

        match serde_json::from_str::<Option<ScoreMap>>(&raw) {
            Ok(Some(scores)) => {
                log::info!("loaded {} saved region scores", scores.len());
                scores
            }
            Ok(None) => ScoreMap::new(),
            Err(err) => {
                log::warn!("ignoring malformed scores under '{}': {}", self.key, err);
                ScoreMap::new()
            }
        }
    }

    /// Bind `region` to `level` and persist the whole map
    pub fn assign(
        &self,
        scores: &ScoreMap,
        region: RegionId,
        level: Level,
    ) -> Result<ScoreMap, MapError> {
        log::debug!("{} -> {} ({})", region, level, level.value());
        let next = scores.with_level(region, level);
        self.save(&next)?;
        Ok(next)
    }

    /// Zero every region already in the map and persist
    pub fn reset_all(&self, scores: &ScoreMap) -> Result<ScoreMap, MapError> {
        let next = scores.zeroed();
        log::info!("reset {} regions", next.len());
        self.save(&next)?;
        Ok(next)
    }

    fn save(&self, scores: &ScoreMap) -> Result<(), MapError> {
        let raw =
            serde_json::to_string(scores).map_err(|e| MapError::Serialize(e.to_string()))?;
        self.backend.set(&self.key, &raw)
    }
}
