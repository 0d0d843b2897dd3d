//! One-shot reveal of elements and skill bars as they scroll into view.
//!
//! Both trackers only see intersection reports; the observer itself lives in
//! the browser crate. A `true` return tells the caller to stop observing.

use crate::dom::{ClassList, InlineStyle};

pub const REVEALED: &str = "revealed";
pub const ANIMATED: &str = "animated";
/// Custom property consumed by the skill bar width transition.
pub const TARGET_WIDTH_PROPERTY: &str = "--target-width";

#[derive(Debug)]
struct Slot<N> {
    node: N,
    done: bool,
}

/// Tracks reveal targets. Each flips to revealed at most once.
#[derive(Debug)]
pub struct ScrollReveal<N> {
    slots: Vec<Slot<N>>,
}

impl<N: ClassList + PartialEq> ScrollReveal<N> {
    pub fn new(nodes: impl IntoIterator<Item = N>) -> Self {
        Self {
            slots: nodes
                .into_iter()
                .map(|node| Slot { node, done: false })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.done).count()
    }

    /// Handle one intersection report. Returns `true` when the target was
    /// just revealed and should no longer be observed.
    pub fn on_intersection(&mut self, node: &N, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }

        match self.slots.iter_mut().find(|s| &s.node == node) {
            Some(slot) if !slot.done => {
                slot.node.add_class(REVEALED);
                slot.done = true;
                true
            }
            _ => false,
        }
    }
}

/// Tracks skill progress bars. Each animates at most once.
#[derive(Debug)]
pub struct SkillBars<N> {
    slots: Vec<Slot<N>>,
}

impl<N: ClassList + InlineStyle + PartialEq> SkillBars<N> {
    pub fn new(nodes: impl IntoIterator<Item = N>) -> Self {
        Self {
            slots: nodes
                .into_iter()
                .map(|node| Slot { node, done: false })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Copy the bar's inline width into the transition property and start
    /// the fill. Returns `true` when the bar should no longer be observed.
    pub fn on_intersection(&mut self, node: &N, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }

        let Some(slot) = self.slots.iter_mut().find(|s| &s.node == node) else {
            return false;
        };
        if slot.done {
            return false;
        }

        let width = slot.node.style("width").unwrap_or_default();
        if width.is_empty() {
            log::debug!("skill bar without inline width");
        }
        slot.node.set_style(TARGET_WIDTH_PROPERTY, &width);
        slot.node.add_class(ANIMATED);
        slot.done = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeNode;

    #[test]
    fn test_reveal_once() {
        let a = FakeNode::new();
        let b = FakeNode::new();
        let mut reveal = ScrollReveal::new([a.clone(), b.clone()]);

        assert!(!reveal.on_intersection(&a, false));
        assert!(!a.has_class(REVEALED));

        assert!(reveal.on_intersection(&a, true));
        assert!(a.has_class(REVEALED));
        assert!(!b.has_class(REVEALED));

        // Late reports after unobserve are ignored.
        assert!(!reveal.on_intersection(&a, true));
        assert!(!reveal.on_intersection(&a, false));
        assert!(a.has_class(REVEALED));
        assert_eq!(a.class_ops(REVEALED), 1);
        assert_eq!(reveal.revealed_count(), 1);
    }

    #[test]
    fn test_reveal_ignores_unknown_nodes() {
        let mut reveal = ScrollReveal::new([FakeNode::new()]);
        let stranger = FakeNode::new();

        assert!(!reveal.on_intersection(&stranger, true));
        assert!(!stranger.has_class(REVEALED));
    }

    #[test]
    fn test_skill_bar_copies_width() {
        let bar = FakeNode::new().with_style("width", "85%");
        let mut bars = SkillBars::new([bar.clone()]);

        assert!(bars.on_intersection(&bar, true));
        assert_eq!(bar.style(TARGET_WIDTH_PROPERTY).as_deref(), Some("85%"));
        assert!(bar.has_class(ANIMATED));

        assert!(!bars.on_intersection(&bar, true));
        assert_eq!(bar.class_ops(ANIMATED), 1);
    }

    #[test]
    fn test_skill_bar_waits_for_intersection() {
        let bar = FakeNode::new().with_style("width", "40%");
        let mut bars = SkillBars::new([bar.clone()]);

        assert!(!bars.on_intersection(&bar, false));
        assert!(bar.style(TARGET_WIDTH_PROPERTY).is_none());
        assert!(!bar.has_class(ANIMATED));
    }
}
