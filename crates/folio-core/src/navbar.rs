//! Navbar style switch driven by the scroll offset.

use crate::{config::NavbarConfig, dom::ClassList};

pub const SCROLLED: &str = "scrolled";

pub struct NavbarStyler<N> {
    navbar: N,
    threshold: f64,
}

impl<N: ClassList> NavbarStyler<N> {
    pub fn new(navbar: N, config: &NavbarConfig) -> Self {
        Self {
            navbar,
            threshold: config.scroll_threshold,
        }
    }

    /// Apply the state for the current offset. Runs on every scroll event,
    /// so it sets state rather than toggling it.
    pub fn on_scroll(&self, offset_y: f64) {
        if offset_y > self.threshold {
            self.navbar.add_class(SCROLLED);
        } else {
            self.navbar.remove_class(SCROLLED);
        }
    }
}
