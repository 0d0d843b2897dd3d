//! Folio Frontend
//!
//! WebAssembly entry point: installs logging, loads the embedded page
//! configuration and wires every component on start.

use std::cell::RefCell;

use folio_core::{FolioConfig, Notifier, ToastKind};
use folio_ui::ToastService;
use wasm_bindgen::prelude::*;

const CONFIG: &str = include_str!("../folio.toml");

thread_local! {
    static TOASTS: RefCell<Option<ToastService>> = const { RefCell::new(None) };
}

fn load_config() -> FolioConfig {
    FolioConfig::from_toml_str(CONFIG).unwrap_or_else(|err| {
        log::error!("invalid embedded configuration, using defaults: {err}");
        FolioConfig::default()
    })
}

/// Initialize the WASM module and wire the page.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);

    let config = load_config();
    match folio_ui::boot(&config) {
        Ok(report) => {
            log::info!(
                "folio ready: {} wired, {} failed",
                report.wired.len(),
                report.failed.len()
            );
            TOASTS.with(|toasts| *toasts.borrow_mut() = report.toasts);
        }
        Err(err) => log::error!("folio failed to start: {err}"),
    }
}

/// Show a toast from page scripts. `kind` is `success`, `error` or `info`.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, title: Option<String>, kind: Option<String>) -> bool {
    let kind = kind.as_deref().map(ToastKind::from_name).unwrap_or_default();
    TOASTS.with(|toasts| match toasts.borrow_mut().as_mut() {
        Some(service) => {
            service.show_toast(message, title.as_deref(), kind);
            true
        }
        None => {
            log::warn!("toast container missing; dropping `{message}`");
            false
        }
    })
}

/// Get the version of the site bundle.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
