//! Folio UI Bindings
//!
//! Browser side of the portfolio page: DOM adapters for the core
//! controllers, the toast stack view and the event wiring.
//!
//! # Components
//!
//! ## Adapters
//! - [`ElementNode`] - Any element, exposed through the core capability traits
//! - [`ContactFormElement`] - The contact form and its four fields
//! - [`ModalView`] - Slots of the testimonial modal
//!
//! ## Runtime
//! - [`TimerDriver`] - Runs core timer commands on browser timeouts
//! - [`MailClient`] - Sends contact messages over REST or through the page's SDK
//! - [`ToastStack`] / [`ToastService`] - Mounted toast notifications
//!
//! ## Wiring
//! - [`boot`] - Wires every component against the current document
//!
//! # Example
//!
//! ```ignore
//! use folio_core::FolioConfig;
//!
//! let report = folio_ui::boot(&FolioConfig::default())?;
//! log::info!("wired: {:?}", report.wired);
//! ```

pub mod mail;
pub mod node;
pub mod observe;
pub mod selectors;
pub mod timers;
pub mod toast;
pub mod wiring;

pub use mail::{EmailJsSdk, EmailJsTransport, MailClient};
pub use node::{ContactFormElement, ElementNode, ModalView, TestimonialItem};
pub use observe::wire_reveal;
pub use timers::{Fire, TimerDriver};
pub use toast::{ToastService, ToastStack};
pub use wiring::{BootReport, Page, boot};
