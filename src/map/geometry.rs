//! Screen-space geometry for floating boxes
//!
//! The level card and the hover label are both kept inside the viewport by
//! [`clamp_to_viewport`].

use serde::{Deserialize, Serialize};

/// A screen position in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: f64) -> Self {
        Self::new(self.x + by, self.y + by)
    }
}

/// Width and height in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Move a box at `at` so it does not overflow the right or bottom edge
///
/// A box overflowing the right edge is pulled back to `margin` pixels from
/// it; one overflowing the bottom edge is pulled up flush with it.
pub fn clamp_to_viewport(at: Point, size: Size, viewport: Size, margin: f64) -> Point {
    let x = if at.x + size.width > viewport.width {
        viewport.width - size.width - margin
    } else {
        at.x
    };
    let y = if at.y + size.height > viewport.height {
        viewport.height - size.height
    } else {
        at.y
    };
    Point::new(x, y)
}

/// Anchor of the level card for a click at `click`
pub fn card_anchor(click: Point, card: Size, viewport: Size, margin: f64) -> Point {
    clamp_to_viewport(click, card, viewport, margin)
}

/// Anchor of the hover label for a pointer at `pointer`
pub fn label_anchor(pointer: Point, label: Size, viewport: Size, offset: f64, margin: f64) -> Point {
    clamp_to_viewport(pointer.offset(offset), label, viewport, margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CARD: Size = Size::new(225.0, 330.0);
    const VIEWPORT: Size = Size::new(800.0, 600.0);

    #[test]
    fn card_near_corner_is_pulled_inside() {
        let anchor = card_anchor(Point::new(700.0, 500.0), CARD, VIEWPORT, 10.0);
        assert_eq!(anchor, Point::new(565.0, 270.0));
    }

    #[test]
    fn card_with_room_stays_put() {
        let anchor = card_anchor(Point::new(10.0, 10.0), CARD, VIEWPORT, 10.0);
        assert_eq!(anchor, Point::new(10.0, 10.0));
    }

    #[test]
    fn only_the_overflowing_axis_moves() {
        let anchor = card_anchor(Point::new(700.0, 100.0), CARD, VIEWPORT, 10.0);
        assert_eq!(anchor, Point::new(565.0, 100.0));

        let anchor = card_anchor(Point::new(100.0, 400.0), CARD, VIEWPORT, 10.0);
        assert_eq!(anchor, Point::new(100.0, 270.0));
    }

    #[test]
    fn label_is_offset_from_pointer() {
        let label = Size::new(80.0, 24.0);
        let anchor = label_anchor(Point::new(100.0, 100.0), label, VIEWPORT, 10.0, 10.0);
        assert_eq!(anchor, Point::new(110.0, 110.0));
    }

    #[test]
    fn label_at_bottom_right_is_clamped() {
        let label = Size::new(80.0, 24.0);
        let anchor = label_anchor(Point::new(790.0, 590.0), label, VIEWPORT, 10.0, 10.0);
        assert_eq!(anchor, Point::new(710.0, 576.0));
    }

    proptest! {
        #[test]
        fn clamped_box_never_overflows(
            x in 0.0f64..2000.0,
            y in 0.0f64..2000.0,
            w in 1.0f64..300.0,
            h in 1.0f64..300.0,
        ) {
            let viewport = Size::new(800.0, 600.0);
            let at = clamp_to_viewport(Point::new(x, y), Size::new(w, h), viewport, 10.0);
            prop_assert!(at.x + w <= viewport.width);
            prop_assert!(at.y + h <= viewport.height);
        }

        #[test]
        fn fitting_box_is_unchanged(x in 0.0f64..400.0, y in 0.0f64..200.0) {
            let at = Point::new(x, y);
            prop_assert_eq!(clamp_to_viewport(at, CARD, VIEWPORT, 10.0), at);
        }
    }
}
