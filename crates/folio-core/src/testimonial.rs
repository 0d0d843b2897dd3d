//! Testimonial modal.

use serde::{Deserialize, Serialize};

use crate::{
    dom::{ClassList, ModalSlots, TestimonialSource},
    error::Result,
};

pub const ACTIVE: &str = "active";

/// What the modal copies out of a clicked testimonial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialRecord {
    /// Avatar image source.
    pub avatar_url: String,

    /// Avatar alternative text.
    pub avatar_alt: String,

    /// Title markup.
    pub title_html: String,

    /// Body markup.
    pub text_html: String,
}

/// Modal container and overlay, always toggled together.
pub struct TestimonialModal<C, S> {
    container: C,
    overlay: C,
    slots: S,
}

impl<C: ClassList, S: ModalSlots> TestimonialModal<C, S> {
    pub fn new(container: C, overlay: C, slots: S) -> Self {
        Self {
            container,
            overlay,
            slots,
        }
    }

    pub fn is_open(&self) -> bool {
        self.container.has_class(ACTIVE)
    }

    /// Copy the testimonial into the modal slots, then toggle the modal.
    /// Returns whether the modal is now open.
    pub fn open_from<T: TestimonialSource>(&self, source: &T) -> Result<bool> {
        let record = source.record()?;
        self.slots.fill(&record);
        Ok(self.toggle())
    }

    /// Flip the open state. The overlay follows the container so the pair
    /// never disagrees. Returns whether the modal is now open.
    pub fn toggle(&self) -> bool {
        let open = self.container.toggle_class(ACTIVE);
        if open {
            self.overlay.add_class(ACTIVE);
        } else {
            self.overlay.remove_class(ACTIVE);
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::FolioError,
        testing::{FakeModalSlots, FakeNode, FakeTestimonial},
    };

    fn record() -> TestimonialRecord {
        TestimonialRecord {
            avatar_url: "a.jpg".to_string(),
            avatar_alt: "Jane avatar".to_string(),
            title_html: "Jane".to_string(),
            text_html: "<p>Great work</p>".to_string(),
        }
    }

    #[test]
    fn test_open_fills_slots_and_activates_pair() {
        let container = FakeNode::new();
        let overlay = FakeNode::new();
        let slots = FakeModalSlots::default();
        let modal = TestimonialModal::new(container.clone(), overlay.clone(), slots.clone());

        let open = modal
            .open_from(&FakeTestimonial::new(record()))
            .expect("open modal");

        assert!(open);
        assert_eq!(slots.shown(), Some(record()));
        assert!(container.has_class(ACTIVE));
        assert!(overlay.has_class(ACTIVE));
    }

    #[test]
    fn test_toggle_closes_in_lockstep() {
        let container = FakeNode::new();
        let overlay = FakeNode::new();
        let modal =
            TestimonialModal::new(container.clone(), overlay.clone(), FakeModalSlots::default());

        assert!(modal.toggle());
        assert!(!modal.toggle());
        assert!(!container.has_class(ACTIVE));
        assert!(!overlay.has_class(ACTIVE));
    }

    #[test]
    fn test_overlay_follows_container_after_drift() {
        let container = FakeNode::new();
        let overlay = FakeNode::new().with_class(ACTIVE);
        let modal =
            TestimonialModal::new(container.clone(), overlay.clone(), FakeModalSlots::default());

        assert!(modal.toggle());
        assert!(overlay.has_class(ACTIVE));
        assert!(!modal.toggle());
        assert!(!overlay.has_class(ACTIVE));
    }

    #[test]
    fn test_broken_source_leaves_modal_closed() {
        let container = FakeNode::new();
        let modal =
            TestimonialModal::new(container.clone(), FakeNode::new(), FakeModalSlots::default());
        let source = FakeTestimonial::broken("[data-testimonials-avatar]");

        let err = modal.open_from(&source).expect_err("missing avatar");
        assert!(matches!(err, FolioError::MissingElement { .. }));
        assert!(!modal.is_open());
    }
}
