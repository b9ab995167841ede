//! Widget settings
//!
//! Loaded from `assets/config.toml`, which is compiled into the binary.
//! Every key is optional; missing keys take the defaults below.

use crate::data::{Level, DEFAULT_STORAGE_KEY};
use crate::map::geometry::Size;
use crate::MapError;
use serde::Deserialize;

const EMBEDDED_CONFIG: &str = include_str!("../assets/config.toml");

/// Settings for the map widget
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Storage slot holding the serialized scores
    pub storage_key: String,

    /// Text in front of the running total, e.g. "Norge Level"
    pub total_label: String,

    /// Source repository opened by the GitHub button
    pub source_url: String,

    /// Blurb at the top of the info footnote
    pub blurb: String,

    /// Fixed size of the level picker card
    pub card_size: Size,

    /// Distance between the pointer and the hover label
    pub pointer_offset: f64,

    /// Gap kept between a clamped box and the right viewport edge
    pub edge_margin: f64,

    pub captions: LevelCaptions,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            total_label: "Norge Level".to_string(),
            source_url: "https://github.com/smstone0/smstone0.github.io".to_string(),
            blurb: "Visualise your travel and share with friends and family!".to_string(),
            card_size: Size::new(225.0, 330.0),
            pointer_offset: 10.0,
            edge_margin: 10.0,
            captions: LevelCaptions::default(),
        }
    }
}

impl MapConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, MapError> {
        toml::from_str(text).map_err(|e| MapError::Config(e.to_string()))
    }

    /// The compiled-in configuration, or defaults if it does not parse
    pub fn embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("falling back to default configuration: {}", err);
                Self::default()
            }
        }
    }

    /// Running total as displayed, e.g. "Norge Level 12"
    pub fn total_text(&self, total: u32) -> String {
        format!("{} {}", self.total_label, total)
    }
}

/// Card captions for each level
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LevelCaptions {
    pub lived: String,
    pub stayed: String,
    pub visited: String,
    pub stopped: String,
    pub passed: String,
    pub never_been: String,
}

impl Default for LevelCaptions {
    fn default() -> Self {
        Self {
            lived: "Bodd her".to_string(),
            stayed: "Overnattet her".to_string(),
            visited: "Besøkt her".to_string(),
            stopped: "Stoppet her".to_string(),
            passed: "Passert her".to_string(),
            never_been: "Aldri vert her".to_string(),
        }
    }
}

impl LevelCaptions {
    pub fn caption(&self, level: Level) -> &str {
        match level {
            Level::Lived => &self.lived,
            Level::Stayed => &self.stayed,
            Level::Visited => &self.visited,
            Level::Stopped => &self.stopped,
            Level::Passed => &self.passed,
            Level::NeverBeen => &self.never_been,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = MapConfig::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.storage_key, "countyScores");
        assert_eq!(config.card_size, Size::new(225.0, 330.0));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = MapConfig::from_toml_str("total_label = \"UK Level\"\n").unwrap();
        assert_eq!(config.total_label, "UK Level");
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.captions, LevelCaptions::default());
    }

    #[test]
    fn partial_captions_keep_the_rest() {
        let config = MapConfig::from_toml_str("[captions]\nlived = \"Lived here\"\n").unwrap();
        assert_eq!(config.captions.caption(Level::Lived), "Lived here");
        assert_eq!(config.captions.caption(Level::Passed), "Passert her");
    }

    #[test]
    fn bad_types_are_config_errors() {
        let err = MapConfig::from_toml_str("pointer_offset = \"ten\"").unwrap_err();
        assert!(matches!(err, MapError::Config(_)));
    }

    #[test]
    fn total_text_joins_label_and_sum() {
        assert_eq!(MapConfig::default().total_text(12), "Norge Level 12");
    }
}
