//! Capability traits describing what each component needs from the page.
//!
//! The browser crate implements these for `web_sys` elements; [`crate::testing`]
//! implements them in memory.

use crate::{error::Result, testimonial::TestimonialRecord};

/// Visual state carried as class names.
pub trait ClassList {
    fn add_class(&self, name: &str);

    fn remove_class(&self, name: &str);

    fn has_class(&self, name: &str) -> bool;

    /// Flip a class and return whether it is now present.
    fn toggle_class(&self, name: &str) -> bool {
        if self.has_class(name) {
            self.remove_class(name);
            false
        } else {
            self.add_class(name);
            true
        }
    }
}

/// Visible text of a node.
pub trait TextContent {
    fn text(&self) -> String;

    fn set_text(&self, text: &str);
}

/// Inline style access, including custom properties.
pub trait InlineStyle {
    fn style(&self, property: &str) -> Option<String>;

    fn set_style(&self, property: &str, value: &str);
}

/// An item that can be shown or hidden by category.
pub trait Filterable: ClassList {
    /// Declared category tag, compared as stored.
    fn category(&self) -> Option<String>;

    fn set_visible(&self, visible: bool) {
        if visible {
            self.add_class("active");
        } else {
            self.remove_class("active");
        }
    }
}

/// A page section selectable from the navigation.
pub trait PageTarget: ClassList {
    fn page_key(&self) -> Option<String>;
}

/// A clickable testimonial carrying the data the modal displays.
pub trait TestimonialSource {
    fn record(&self) -> Result<TestimonialRecord>;
}

/// Display slots of the testimonial modal.
pub trait ModalSlots {
    fn fill(&self, record: &TestimonialRecord);
}

/// The contact form element.
pub trait ContactForm: ClassList {
    /// Whether every tracked field satisfies its declared constraints.
    fn check_validity(&self) -> bool;

    fn snapshot(&self) -> crate::mail::ContactFields;

    /// Restore every field to its initial (empty) value.
    fn reset(&self);
}

/// A control that can be enabled or disabled.
pub trait SubmitControl {
    fn set_disabled(&self, disabled: bool);

    fn is_disabled(&self) -> bool;
}
