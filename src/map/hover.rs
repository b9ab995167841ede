//! Hover label lifecycle
//!
//! Hovering a region shows a small label with its name that follows the
//! pointer. The label and its move listener are owned by a single session:
//! both are acquired on hover-enter and released together, exactly once, on
//! hover-exit.

use super::geometry::{label_anchor, Point, Size};
use crate::data::RegionId;
use crate::MapError;

/// The document that hover labels live in
pub trait LabelHost {
    /// A label element attached to the document
    type Label;

    /// The hovered shape, used as the target of move tracking
    type Region;

    /// Move listener registration; dropping it detaches the listener
    type Tracking;

    fn create_label(&self, text: &str) -> Result<Self::Label, MapError>;

    fn remove_label(&self, label: &Self::Label);

    /// Rendered size of the label
    fn measure(&self, label: &Self::Label) -> Size;

    fn place(&self, label: &Self::Label, at: Point);

    fn viewport(&self) -> Size;

    /// Start moving `label` with the pointer while it is over `region`
    fn track_moves(
        &self,
        region: &Self::Region,
        label: &Self::Label,
        placement: LabelPlacement,
    ) -> Self::Tracking;
}

/// Offset from the pointer and margin from the viewport edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub offset: f64,
    pub margin: f64,
}

impl Default for LabelPlacement {
    fn default() -> Self {
        Self {
            offset: 10.0,
            margin: 10.0,
        }
    }
}

/// Place `label` next to the pointer, kept inside the viewport
pub fn follow_pointer<H: LabelHost>(host: &H, label: &H::Label, pointer: Point, placement: LabelPlacement) {
    let at = label_anchor(
        pointer,
        host.measure(label),
        host.viewport(),
        placement.offset,
        placement.margin,
    );
    host.place(label, at);
}

struct HoverSession<H: LabelHost> {
    region: RegionId,
    label: H::Label,
    tracking: H::Tracking,
}

/// Owns at most one live hover label
pub struct HoverTracker<H: LabelHost> {
    host: H,
    placement: LabelPlacement,
    session: Option<HoverSession<H>>,
}

impl<H: LabelHost> HoverTracker<H> {
    pub fn new(host: H, placement: LabelPlacement) -> Self {
        Self {
            host,
            placement,
            session: None,
        }
    }

    /// Region currently showing a label
    pub fn hovered(&self) -> Option<&RegionId> {
        self.session.as_ref().map(|session| &session.region)
    }

    /// Pointer entered `region`; any previous label is released first
    pub fn enter(&mut self, id: RegionId, region: &H::Region, pointer: Point) -> Result<(), MapError> {
        self.leave();

        let label = self.host.create_label(id.as_str())?;
        follow_pointer(&self.host, &label, pointer, self.placement);
        let tracking = self.host.track_moves(region, &label, self.placement);
        self.session = Some(HoverSession {
            region: id,
            label,
            tracking,
        });
        Ok(())
    }

    /// Pointer left the hovered region; returns whether a label was released
    pub fn leave(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        drop(session.tracking);
        self.host.remove_label(&session.label);
        true
    }
}

impl<H: LabelHost> Drop for HoverTracker<H> {
    fn drop(&mut self) {
        self.leave();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeLabel {
        id: usize,
        text: String,
        at: Point,
    }

    /// Document double that records labels and live move listeners
    #[derive(Clone, Default)]
    struct FakeDocument {
        labels: Rc<RefCell<Vec<FakeLabel>>>,
        next_id: Rc<Cell<usize>>,
        listeners: Rc<RefCell<Vec<Registration>>>,
        removals: Rc<Cell<usize>>,
    }

    #[derive(Clone, Copy)]
    struct Registration {
        id: usize,
        label: usize,
        placement: LabelPlacement,
    }

    /// Detaches its registration when dropped, like a gloo `EventListener`
    struct Listener {
        id: usize,
        registry: Rc<RefCell<Vec<Registration>>>,
    }

    impl Drop for Listener {
        fn drop(&mut self) {
            self.registry.borrow_mut().retain(|r| r.id != self.id);
        }
    }

    impl FakeDocument {
        fn label_count(&self) -> usize {
            self.labels.borrow().len()
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }

        fn only_label(&self) -> FakeLabel {
            let labels = self.labels.borrow();
            assert_eq!(labels.len(), 1);
            labels[0].clone()
        }

        /// Dispatch a pointer move to every attached listener
        fn move_pointer(&self, pointer: Point) {
            let attached: Vec<Registration> = self.listeners.borrow().clone();
            for registration in attached {
                follow_pointer(self, &registration.label, pointer, registration.placement);
            }
        }
    }

    impl LabelHost for FakeDocument {
        type Label = usize;
        type Region = ();
        type Tracking = Listener;

        fn create_label(&self, text: &str) -> Result<usize, MapError> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.labels.borrow_mut().push(FakeLabel {
                id,
                text: text.to_string(),
                at: Point::default(),
            });
            Ok(id)
        }

        fn remove_label(&self, label: &usize) {
            self.removals.set(self.removals.get() + 1);
            self.labels.borrow_mut().retain(|l| l.id != *label);
        }

        fn measure(&self, _label: &usize) -> Size {
            Size::new(80.0, 24.0)
        }

        fn place(&self, label: &usize, at: Point) {
            if let Some(l) = self.labels.borrow_mut().iter_mut().find(|l| l.id == *label) {
                l.at = at;
            }
        }

        fn viewport(&self) -> Size {
            Size::new(800.0, 600.0)
        }

        fn track_moves(&self, _region: &(), label: &usize, placement: LabelPlacement) -> Listener {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push(Registration {
                id,
                label: *label,
                placement,
            });
            Listener {
                id,
                registry: self.listeners.clone(),
            }
        }
    }

    fn tracker() -> (HoverTracker<FakeDocument>, FakeDocument) {
        let doc = FakeDocument::default();
        (HoverTracker::new(doc.clone(), LabelPlacement::default()), doc)
    }

    #[test]
    fn one_label_while_hovering_none_after() {
        let (mut hover, doc) = tracker();

        hover.enter(RegionId::from("Oslo"), &(), Point::new(100.0, 100.0)).unwrap();
        for step in 0..25_i32 {
            doc.move_pointer(Point::new(100.0 + f64::from(step), 120.0));
            assert_eq!(doc.label_count(), 1);
        }
        assert_eq!(doc.only_label().text, "Oslo");
        assert_eq!(doc.listener_count(), 1);

        assert!(hover.leave());
        assert_eq!(doc.label_count(), 0);
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn leave_without_moves_releases_cleanly() {
        let (mut hover, doc) = tracker();

        hover.enter(RegionId::from("Agder"), &(), Point::new(5.0, 5.0)).unwrap();
        assert!(hover.leave());

        assert_eq!(doc.label_count(), 0);
        assert_eq!(doc.listener_count(), 0);
        assert_eq!(doc.removals.get(), 1);
    }

    #[test]
    fn second_leave_is_a_no_op() {
        let (mut hover, doc) = tracker();

        hover.enter(RegionId::from("Agder"), &(), Point::new(5.0, 5.0)).unwrap();
        assert!(hover.leave());
        assert!(!hover.leave());
        assert_eq!(doc.removals.get(), 1);
    }

    #[test]
    fn entering_another_region_replaces_the_label() {
        let (mut hover, doc) = tracker();

        hover.enter(RegionId::from("Oslo"), &(), Point::new(5.0, 5.0)).unwrap();
        hover.enter(RegionId::from("Akershus"), &(), Point::new(6.0, 6.0)).unwrap();

        assert_eq!(doc.only_label().text, "Akershus");
        assert_eq!(doc.listener_count(), 1);
        assert_eq!(hover.hovered(), Some(&RegionId::from("Akershus")));
    }

    #[test]
    fn label_follows_pointer_inside_viewport() {
        let (mut hover, doc) = tracker();

        hover.enter(RegionId::from("Oslo"), &(), Point::new(100.0, 100.0)).unwrap();
        assert_eq!(doc.only_label().at, Point::new(110.0, 110.0));

        doc.move_pointer(Point::new(790.0, 590.0));
        assert_eq!(doc.only_label().at, Point::new(710.0, 576.0));
    }

    #[test]
    fn moves_after_leave_reach_no_label() {
        let (mut hover, doc) = tracker();

        hover.enter(RegionId::from("Oslo"), &(), Point::new(100.0, 100.0)).unwrap();
        doc.move_pointer(Point::new(200.0, 200.0));
        assert_eq!(doc.only_label().at, Point::new(210.0, 210.0));

        hover.leave();
        doc.move_pointer(Point::new(300.0, 300.0));
        assert_eq!(doc.label_count(), 0);
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn only_the_replacing_label_follows_moves() {
        let (mut hover, doc) = tracker();

        hover.enter(RegionId::from("Oslo"), &(), Point::new(5.0, 5.0)).unwrap();
        hover.enter(RegionId::from("Akershus"), &(), Point::new(6.0, 6.0)).unwrap();
        doc.move_pointer(Point::new(50.0, 60.0));

        let label = doc.only_label();
        assert_eq!(label.text, "Akershus");
        assert_eq!(label.at, Point::new(60.0, 70.0));
    }

    #[test]
    fn dropping_the_tracker_releases_the_label() {
        let (mut hover, doc) = tracker();
        hover.enter(RegionId::from("Oslo"), &(), Point::new(1.0, 1.0)).unwrap();

        drop(hover);

        assert_eq!(doc.label_count(), 0);
        assert_eq!(doc.listener_count(), 0);
    }
}
