//! In-page navigation between sections, without a URL router.

use crate::dom::{ClassList, PageTarget, TextContent};

pub const ACTIVE: &str = "active";

/// Result of a navigation click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOutcome {
    /// Index of the section made active, if any matched.
    pub active: Option<usize>,
    /// Whether the viewport should jump to the top.
    pub scroll_to_top: bool,
}

/// Link `i` corresponds to section `i`.
pub struct PageNavigator<L, P> {
    links: Vec<L>,
    pages: Vec<P>,
}

impl<L, P> PageNavigator<L, P>
where
    L: ClassList + TextContent,
    P: PageTarget,
{
    pub fn new(links: Vec<L>, pages: Vec<P>) -> Self {
        if links.len() != pages.len() {
            log::warn!(
                "{} nav links for {} page sections; extra entries never activate",
                links.len(),
                pages.len()
            );
        }
        Self { links, pages }
    }

    pub fn links(&self) -> &[L] {
        &self.links
    }

    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    /// Activate the section whose page key equals the clicked link's
    /// lower-cased label. With no match every section and link ends up
    /// inactive.
    pub fn navigate(&self, link_index: usize) -> NavOutcome {
        let Some(link) = self.links.get(link_index) else {
            log::warn!("nav link {link_index} out of range");
            return NavOutcome {
                active: None,
                scroll_to_top: false,
            };
        };

        let target = link.text().trim().to_lowercase();
        let mut active = None;

        for (i, page) in self.pages.iter().enumerate() {
            let matches = page.page_key().as_deref() == Some(target.as_str());
            if matches && active.is_none() {
                page.add_class(ACTIVE);
                if let Some(link) = self.links.get(i) {
                    link.add_class(ACTIVE);
                }
                active = Some(i);
            } else {
                page.remove_class(ACTIVE);
                if let Some(link) = self.links.get(i) {
                    link.remove_class(ACTIVE);
                }
            }
        }

        if active.is_none() {
            log::debug!("no page section keyed `{target}`");
        }

        NavOutcome {
            active,
            scroll_to_top: active.is_some(),
        }
    }
}
