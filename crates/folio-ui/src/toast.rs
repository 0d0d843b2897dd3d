//! Toast stack view and the service that feeds it.
//!
//! The notifier state lives in a signal; the view re-renders classes from it
//! while the browser timeouts advance each toast's lifecycle.

use std::rc::Rc;

use folio_core::{
    Notifier, Toast, ToastId, ToastKind, ToastNotifier, ToastTimer, config::ToastConfig,
};
use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::timers::{Fire, TimerDriver};

/// Renders every attached toast.
#[component]
pub fn ToastStack(
    /// Toast state owned by the service.
    notifier: RwSignal<ToastNotifier>,
) -> impl IntoView {
    view! {
      <For
        each=move || notifier.with(|n| n.toasts().to_vec())
        key=|toast| toast.id
        children=move |toast| view! { <ToastCard toast=toast notifier=notifier /> }
      />
    }
}

/// A single toast card with its close control.
#[component]
fn ToastCard(
    /// The toast as first rendered.
    toast: Toast,
    /// Shared toast state.
    notifier: RwSignal<ToastNotifier>,
) -> impl IntoView {
    let id = toast.id;
    let kind = toast.kind;
    let class = move || {
        notifier.with(|n| {
            n.get(id)
                .map(Toast::class_name)
                .unwrap_or_else(|| format!("toast {}", kind.as_str()))
        })
    };
    let title = toast.title.clone();

    view! {
      <div class=class>
        <div class="toast-icon">{kind.icon()}</div>
        <div class="toast-content">
          {title.map(|title| view! { <div class="toast-title">{title}</div> })}
          <div class="toast-message">{toast.message.clone()}</div>
        </div>
        <button
          class="toast-close"
          aria-label="Close"
          on:click=move |_| notifier.update(|n| n.close(id))
        >
          "×"
        </button>
      </div>
    }
}

/// Handle to the mounted toast stack. Cheap to clone.
#[derive(Clone)]
pub struct ToastService {
    notifier: RwSignal<ToastNotifier>,
    timers: TimerDriver<ToastTimer>,
    fire: Fire<ToastTimer>,
}

impl ToastService {
    /// Mount the stack into the toast container. The stack is the only
    /// writer to that container.
    pub fn mount(container: HtmlElement, config: &ToastConfig) -> Self {
        let notifier = RwSignal::new(ToastNotifier::new(config));
        leptos::mount::mount_to(container, move || view! { <ToastStack notifier=notifier /> })
            .forget();

        let fire: Fire<ToastTimer> =
            Rc::new(move |timer| notifier.try_update(|n| n.handle(timer)).unwrap_or_default());

        Self {
            notifier,
            timers: TimerDriver::new(),
            fire,
        }
    }
}

impl Notifier for ToastService {
    fn show_toast(&mut self, message: &str, title: Option<&str>, kind: ToastKind) -> ToastId {
        let shown = self.notifier.try_update(|n| n.show(message, title, kind));
        match shown {
            Some((id, commands)) => {
                self.timers.apply(commands, &self.fire);
                id
            }
            None => {
                log::error!("toast stack disposed; dropping `{message}`");
                ToastId(0)
            }
        }
    }
}
