//! Mobile sidebar expand/collapse.

use crate::dom::ClassList;

pub struct SidebarToggle<N> {
    sidebar: N,
}

impl<N: ClassList> SidebarToggle<N> {
    pub fn new(sidebar: N) -> Self {
        Self { sidebar }
    }

    /// Returns whether the sidebar is now expanded.
    pub fn toggle(&self) -> bool {
        self.sidebar.toggle_class("active")
    }
}
