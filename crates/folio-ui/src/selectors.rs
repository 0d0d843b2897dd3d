//! Markup contract.
//!
//! Renaming any of these in the markup silently unwires the matching
//! component; wiring reports the selector that failed.

pub const LOADER_ID: &str = "pageLoader";
pub const TOAST_CONTAINER_ID: &str = "toastContainer";

pub const NAVBAR: &str = ".navbar";
pub const REVEAL_TARGETS: &str = ".scroll-reveal, .fade-left, .fade-right, .scale-up";
pub const SKILL_BARS: &str = ".skill-progress-fill";

pub const SIDEBAR: &str = "[data-sidebar]";
pub const SIDEBAR_BTN: &str = "[data-sidebar-btn]";

pub const TESTIMONIAL_ITEM: &str = "[data-testimonials-item]";
pub const TESTIMONIAL_AVATAR: &str = "[data-testimonials-avatar]";
pub const TESTIMONIAL_TITLE: &str = "[data-testimonials-title]";
pub const TESTIMONIAL_TEXT: &str = "[data-testimonials-text]";
pub const MODAL_CONTAINER: &str = "[data-modal-container]";
pub const MODAL_CLOSE_BTN: &str = "[data-modal-close-btn]";
pub const OVERLAY: &str = "[data-overlay]";
pub const MODAL_IMG: &str = "[data-modal-img]";
pub const MODAL_TITLE: &str = "[data-modal-title]";
pub const MODAL_TEXT: &str = "[data-modal-text]";

pub const SELECT: &str = "[data-select]";
pub const SELECT_ITEM: &str = "[data-select-item]";
/// Spelled as in the markup.
pub const SELECT_VALUE: &str = "[data-selecct-value]";
pub const FILTER_BTN: &str = "[data-filter-btn]";
pub const FILTER_ITEM: &str = "[data-filter-item]";
pub const CATEGORY_ATTR: &str = "data-category";

pub const FORM: &str = "[data-form]";
pub const FORM_INPUT: &str = "[data-form-input]";
pub const FORM_BTN: &str = "[data-form-btn]";
pub const FIELD_NAME: &str = "fullname";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_MESSAGE: &str = "message";

pub const NAV_LINK: &str = "[data-nav-link]";
pub const PAGE: &str = "[data-page]";
pub const PAGE_ATTR: &str = "data-page";
