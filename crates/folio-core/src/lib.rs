//! Folio Core Library
//!
//! DOM-free controllers for the interactive parts of the portfolio page,
//! plus configuration and error handling.
//!
//! Each controller is constructed once with the page handles it needs,
//! expressed through the capability traits in [`dom`]. Time never passes
//! inside a controller: delayed work comes back as [`schedule::Command`]s.

pub mod config;
pub mod dom;
pub mod error;
pub mod filter;
pub mod form;
pub mod loader;
pub mod mail;
pub mod navbar;
pub mod navigator;
pub mod reveal;
pub mod ripple;
pub mod schedule;
pub mod sidebar;
pub mod testimonial;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod toast;

pub use config::FolioConfig;
pub use error::{FolioError, MailError, Result};
pub use filter::{FilterController, FilterSelection};
pub use form::FormGateway;
pub use loader::{Loader, LoaderEvent, LoaderPhase, LoaderTimer};
pub use mail::{ContactFields, MailDelivery, MailReceipt, MailRequest, MailTransport};
pub use navbar::NavbarStyler;
pub use navigator::{NavOutcome, PageNavigator};
pub use reveal::{ScrollReveal, SkillBars};
pub use ripple::{Rect, RippleEffect, RippleGeometry, RippleSpec};
pub use schedule::{Command, TimerQueue};
pub use sidebar::SidebarToggle;
pub use testimonial::{TestimonialModal, TestimonialRecord};
pub use toast::{Notifier, Toast, ToastId, ToastKind, ToastNotifier, ToastTimer};
