//! Category filter driven by a custom dropdown and a button row.
//!
//! Both affordances funnel into one selection, so the filtered set never
//! depends on which one was used last.

use crate::dom::{ClassList, Filterable, TextContent};

pub const ACTIVE: &str = "active";
/// Selection value that shows every item.
pub const ALL: &str = "all";

/// Whether an item with `category` is shown for the lower-cased `selected`
/// value. The category is compared as stored.
pub fn is_visible(selected: &str, category: Option<&str>) -> bool {
    selected == ALL || category == Some(selected)
}

/// Normalize a control label into a selection value.
pub fn selection_value(label: &str) -> String {
    label.trim().to_lowercase()
}

/// The shared category state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub active_category: String,
    pub active_button: Option<usize>,
}

pub struct FilterController<N, I> {
    dropdown: N,
    value_label: N,
    options: Vec<N>,
    buttons: Vec<N>,
    items: Vec<I>,
    selection: FilterSelection,
}

impl<N, I> FilterController<N, I>
where
    N: ClassList + TextContent,
    I: Filterable,
{
    pub fn new(dropdown: N, value_label: N, options: Vec<N>, buttons: Vec<N>, items: Vec<I>) -> Self {
        let active_button = if buttons.is_empty() { None } else { Some(0) };
        Self {
            dropdown,
            value_label,
            options,
            buttons,
            items,
            selection: FilterSelection {
                active_category: ALL.to_string(),
                active_button,
            },
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Open or close the dropdown. Returns whether it is now open.
    pub fn toggle_dropdown(&self) -> bool {
        self.dropdown.toggle_class(ACTIVE)
    }

    /// Choose the dropdown option at `index`: update the label, close the
    /// dropdown, filter, and move the button highlight to the matching button.
    pub fn select_option(&mut self, index: usize) {
        let Some(option) = self.options.get(index) else {
            log::warn!("filter option {index} out of range");
            return;
        };

        let label = option.text();
        let value = selection_value(&label);
        self.value_label.set_text(&label);
        self.dropdown.toggle_class(ACTIVE);
        self.apply(&value);

        match self
            .buttons
            .iter()
            .position(|b| selection_value(&b.text()) == value)
        {
            Some(button) => self.activate_button(button),
            None => log::debug!("no filter button labelled `{value}`"),
        }
    }

    /// Choose the filter button at `index`.
    pub fn click_button(&mut self, index: usize) {
        let Some(button) = self.buttons.get(index) else {
            log::warn!("filter button {index} out of range");
            return;
        };

        let label = button.text();
        let value = selection_value(&label);
        self.value_label.set_text(&label);
        self.apply(&value);
        self.activate_button(index);
    }

    /// Show exactly the items matching `value` and remember it.
    pub fn apply(&mut self, value: &str) {
        for item in &self.items {
            item.set_visible(is_visible(value, item.category().as_deref()));
        }
        self.selection.active_category = value.to_string();
    }

    fn activate_button(&mut self, index: usize) {
        if let Some(button) = self.selection.active_button.and_then(|p| self.buttons.get(p)) {
            button.remove_class(ACTIVE);
        }
        self.buttons[index].add_class(ACTIVE);
        self.selection.active_button = Some(index);
    }
}
