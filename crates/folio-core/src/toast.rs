//! Transient notification cards.
//!
//! A toast is inserted hidden, flips to `show` shortly after so the
//! stylesheet can animate the change, starts dismissing after the visible
//! period, and is detached once the exit transition has run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{config::ToastConfig, schedule::Command};

/// Visual flavour of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Info => "ℹ",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    /// Unknown names fall back to info.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub title: Option<String>,
    pub kind: ToastKind,
    /// Entrance state.
    pub shown: bool,
    /// Exit state.
    pub hiding: bool,
}

impl Toast {
    /// Class attribute for the card.
    pub fn class_name(&self) -> String {
        let mut class = format!("toast {}", self.kind.as_str());
        if self.shown {
            class.push_str(" show");
        }
        if self.hiding {
            class.push_str(" hide");
        }
        class
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastTimer {
    Enter(ToastId),
    Dismiss(ToastId),
    Detach(ToastId),
}

/// Anything that can put a toast on screen.
pub trait Notifier {
    fn show_toast(&mut self, message: &str, title: Option<&str>, kind: ToastKind) -> ToastId;
}

/// Sole owner of the toast stack.
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    toasts: Vec<Toast>,
    next_id: u64,
    enter_delay: Duration,
    visible: Duration,
    exit: Duration,
}

impl ToastNotifier {
    pub fn new(config: &ToastConfig) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            enter_delay: config.enter_delay(),
            visible: config.visible(),
            exit: config.exit(),
        }
    }

    /// Toasts currently attached, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Append a toast and return the timers that drive its lifecycle.
    pub fn show(
        &mut self,
        message: &str,
        title: Option<&str>,
        kind: ToastKind,
    ) -> (ToastId, Vec<Command<ToastTimer>>) {
        self.next_id += 1;
        let id = ToastId(self.next_id);

        self.toasts.push(Toast {
            id,
            message: message.to_string(),
            title: title.filter(|t| !t.is_empty()).map(str::to_string),
            kind,
            shown: false,
            hiding: false,
        });

        let commands = vec![
            Command::schedule(self.enter_delay, ToastTimer::Enter(id)),
            Command::schedule(self.visible, ToastTimer::Dismiss(id)),
        ];
        (id, commands)
    }

    pub fn handle(&mut self, timer: ToastTimer) -> Vec<Command<ToastTimer>> {
        match timer {
            ToastTimer::Enter(id) => {
                if let Some(toast) = self.get_mut(id) {
                    toast.shown = true;
                }
                Vec::new()
            }
            ToastTimer::Dismiss(id) => match self.get_mut(id) {
                Some(toast) => {
                    toast.shown = false;
                    toast.hiding = true;
                    vec![Command::schedule(self.exit, ToastTimer::Detach(id))]
                }
                None => Vec::new(),
            },
            ToastTimer::Detach(id) => {
                self.toasts.retain(|t| t.id != id);
                Vec::new()
            }
        }
    }

    /// Manual close from the card's close control.
    ///
    /// Only adds the exit state; `show` stays set and the card is detached
    /// on the regular auto-dismiss timeline.
    pub fn close(&mut self, id: ToastId) {
        if let Some(toast) = self.get_mut(id) {
            toast.hiding = true;
        }
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id == id)
    }
}
