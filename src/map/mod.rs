//! Map widget logic
//!
//! Everything here is independent of the browser: the DOM is reached only
//! through the [`RegionCanvas`] and [`LabelHost`] traits.

pub mod export;
pub mod geometry;
pub mod hover;
pub mod projection;
pub mod widget;

pub use export::ExportFile;
pub use geometry::{Point, Size};
pub use hover::{HoverTracker, LabelHost};
pub use projection::{Projection, RegionCanvas, RegionShapes};
pub use widget::{MapWidget, PointerTarget, Selection};

/// Fill colours, one per level
pub mod palette {
    pub const LIVED: &str = "#FF7E7E";
    pub const STAYED: &str = "#FFB57E";
    pub const VISITED: &str = "#FFE57E";
    pub const STOPPED: &str = "#A8FFBE";
    pub const PASSED: &str = "#88AEFF";
    pub const NEUTRAL: &str = "white";
}

/// Fill colour for a raw level; anything outside 1-5 is neutral
pub fn color_for(level: i64) -> &'static str {
    match level {
        5 => palette::LIVED,
        4 => palette::STAYED,
        3 => palette::VISITED,
        2 => palette::STOPPED,
        1 => palette::PASSED,
        _ => palette::NEUTRAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Level;
    use proptest::prelude::*;

    #[test]
    fn documented_levels_have_fixed_colours() {
        assert_eq!(color_for(5), "#FF7E7E");
        assert_eq!(color_for(4), "#FFB57E");
        assert_eq!(color_for(3), "#FFE57E");
        assert_eq!(color_for(2), "#A8FFBE");
        assert_eq!(color_for(1), "#88AEFF");
        assert_eq!(color_for(0), "white");
    }

    #[test]
    fn typed_level_matches_raw_table() {
        for level in Level::ALL {
            assert_eq!(level.color(), color_for(i64::from(level.value())));
        }
    }

    proptest! {
        #[test]
        fn other_integers_are_neutral(level in any::<i64>().prop_filter("in range", |l| !(1..=5).contains(l))) {
            prop_assert_eq!(color_for(level), palette::NEUTRAL);
        }
    }
}
