//! Attaches the core controllers to the live document.
//!
//! Each `wire_*` function resolves its part of the markup contract up front
//! and fails fast on the first missing element, leaving that component
//! unwired. Listeners live for the life of the page.

use std::{cell::RefCell, rc::Rc};

use folio_core::{
    FilterController, FolioConfig, FolioError, FormGateway, Loader, LoaderEvent, LoaderTimer,
    MailTransport, NavbarStyler, PageNavigator, Rect, Result, RippleEffect, RippleSpec,
    SidebarToggle, TestimonialModal,
    config::{LoaderConfig, MailConfig, NavbarConfig, RevealConfig, RippleConfig},
    dom::{ClassList, InlineStyle},
    ripple::RIPPLE,
};
use leptos::prelude::set_timeout;
use wasm_bindgen::{JsCast, closure::Closure};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent, Window};

use crate::{
    mail::MailClient,
    node::{
        ContactFormElement, ElementNode, ModalView, TestimonialItem, by_id, js_error, query,
        query_all,
    },
    observe::wire_reveal,
    selectors,
    timers::{Fire, TimerDriver},
    toast::ToastService,
};

/// The window and document the components attach to.
#[derive(Debug, Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
}

impl Page {
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| FolioError::js("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| FolioError::js("window has no document"))?;
        Ok(Self { window, document })
    }

    /// The module may start after `DOMContentLoaded` has already fired.
    fn dom_parsed(&self) -> bool {
        self.document.ready_state() != "loading"
    }

    fn fully_loaded(&self) -> bool {
        self.document.ready_state() == "complete"
    }
}

/// Attach a listener that lives for the life of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// Run `f` once the document structure is parsed.
fn on_dom_ready(page: &Page, f: impl FnOnce() + 'static) -> Result<()> {
    if page.dom_parsed() {
        f();
        return Ok(());
    }
    let mut f = Some(f);
    listen(&page.document, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    })
}

pub fn wire_loader(page: &Page, config: &LoaderConfig) -> Result<()> {
    let node = page
        .document
        .get_element_by_id(selectors::LOADER_ID)
        .map(ElementNode)
        .ok_or_else(|| FolioError::missing(format!("#{}", selectors::LOADER_ID)))?;

    let loader = Rc::new(RefCell::new(Loader::new(node, config)));
    let timers = TimerDriver::<LoaderTimer>::new();
    let fire: Fire<LoaderTimer> = {
        let loader = Rc::clone(&loader);
        Rc::new(move |timer| loader.borrow_mut().handle(LoaderEvent::Timer(timer)))
    };
    let dispatch = Rc::new(move |event: LoaderEvent| {
        let commands = loader.borrow_mut().handle(event);
        timers.apply(commands, &fire);
    });

    dispatch(LoaderEvent::Start);

    if page.dom_parsed() {
        dispatch(LoaderEvent::DomReady);
    } else {
        let dispatch = Rc::clone(&dispatch);
        listen(&page.document, "DOMContentLoaded", move |_| {
            dispatch(LoaderEvent::DomReady)
        })?;
    }

    if page.fully_loaded() {
        dispatch(LoaderEvent::Loaded);
    } else {
        listen(&page.window, "load", move |_| dispatch(LoaderEvent::Loaded))?;
    }

    Ok(())
}

pub fn wire_navbar(page: &Page, config: &NavbarConfig) -> Result<()> {
    let styler = NavbarStyler::new(query(&page.document, selectors::NAVBAR)?, config);
    let window = page.window.clone();
    listen(&page.window, "scroll", move |_| {
        styler.on_scroll(window.scroll_y().unwrap_or_default());
    })
}

/// The button a click landed on, including clicks on its descendants.
pub fn pressed_button(event: &Event) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest("button")
        .ok()
        .flatten()
}

fn spawn_ripple(document: &Document, button: &Element, spec: &RippleSpec) -> Result<()> {
    let ripple = ElementNode(document.create_element("span").map_err(js_error)?);
    for (property, value) in spec.geometry.styles() {
        ripple.set_style(property, &value);
    }
    ripple.add_class(RIPPLE);
    button.append_child(ripple.element()).map_err(js_error)?;

    let element = ripple.0;
    set_timeout(move || element.remove(), spec.lifetime);
    Ok(())
}

pub fn wire_ripple(page: &Page, config: &RippleConfig) -> Result<()> {
    let effect = RippleEffect::new(config);
    let document = page.document.clone();
    listen(&page.document, "click", move |event| {
        let (Some(mouse), Some(button)) = (event.dyn_ref::<MouseEvent>(), pressed_button(&event))
        else {
            return;
        };

        let rect = button.get_bounding_client_rect();
        let spec = effect.on_press(
            Rect {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            },
            f64::from(mouse.client_x()),
            f64::from(mouse.client_y()),
        );
        if let Err(err) = spawn_ripple(&document, &button, &spec) {
            log::warn!("ripple: {err}");
        }
    })
}

/// Register the observers once the document is parsed.
pub fn wire_scroll_reveal(page: &Page, config: &RevealConfig) -> Result<()> {
    let document = page.document.clone();
    let config = config.clone();
    on_dom_ready(page, move || {
        if let Err(err) = wire_reveal(&document, &config) {
            log::error!("scroll reveal not wired: {err}");
        }
    })
}

pub fn wire_sidebar(page: &Page) -> Result<()> {
    let sidebar = SidebarToggle::new(query(&page.document, selectors::SIDEBAR)?);
    let button = query(&page.document, selectors::SIDEBAR_BTN)?;
    listen(button.element(), "click", move |_| {
        sidebar.toggle();
    })
}

pub fn wire_testimonials(page: &Page) -> Result<()> {
    let document = &page.document;
    let items = query_all(document, selectors::TESTIMONIAL_ITEM)?;
    let container = query(document, selectors::MODAL_CONTAINER)?;
    let close = query(document, selectors::MODAL_CLOSE_BTN)?;
    let overlay = query(document, selectors::OVERLAY)?;
    let slots = ModalView::resolve(document)?;

    let modal = Rc::new(TestimonialModal::new(container, overlay.clone(), slots));

    for item in &items {
        let modal = Rc::clone(&modal);
        let source = TestimonialItem(item.element().clone());
        listen(item.element(), "click", move |_| {
            if let Err(err) = modal.open_from(&source) {
                log::error!("testimonial not shown: {err}");
            }
        })?;
    }

    for control in [close, overlay] {
        let modal = Rc::clone(&modal);
        listen(control.element(), "click", move |_| {
            modal.toggle();
        })?;
    }

    Ok(())
}

pub fn wire_filter(page: &Page) -> Result<()> {
    let document = &page.document;
    let dropdown = query(document, selectors::SELECT)?;
    let label = query(document, selectors::SELECT_VALUE)?;
    let options = query_all(document, selectors::SELECT_ITEM)?;
    let buttons = query_all(document, selectors::FILTER_BTN)?;
    let items = query_all(document, selectors::FILTER_ITEM)?;

    let filter = Rc::new(RefCell::new(FilterController::new(
        dropdown.clone(),
        label,
        options.clone(),
        buttons.clone(),
        items,
    )));

    {
        let filter = Rc::clone(&filter);
        listen(dropdown.element(), "click", move |_| {
            filter.borrow().toggle_dropdown();
        })?;
    }

    for (index, option) in options.iter().enumerate() {
        let filter = Rc::clone(&filter);
        listen(option.element(), "click", move |_| {
            filter.borrow_mut().select_option(index)
        })?;
    }

    for (index, button) in buttons.iter().enumerate() {
        let filter = Rc::clone(&filter);
        listen(button.element(), "click", move |_| {
            filter.borrow_mut().click_button(index)
        })?;
    }

    Ok(())
}

pub fn wire_contact_form(page: &Page, config: &MailConfig, toasts: ToastService) -> Result<()> {
    let document = &page.document;
    let form = ContactFormElement::resolve(document)?;
    let button = query(document, selectors::FORM_BTN)?;
    let inputs = query_all(document, selectors::FORM_INPUT)?;
    let transport = Rc::new(MailClient::for_config(config)?);
    let form_element = form.element().clone();

    let gateway = Rc::new(RefCell::new(FormGateway::new(form, button, config.clone())));

    for input in &inputs {
        let gateway = Rc::clone(&gateway);
        listen(input.element(), "input", move |_| {
            gateway.borrow().on_input();
        })?;
    }

    listen(&form_element, "submit", move |event| {
        event.prevent_default();

        let Some(request) = gateway.borrow_mut().begin_submit() else {
            return;
        };

        let gateway = Rc::clone(&gateway);
        let transport = Rc::clone(&transport);
        let mut toasts = toasts.clone();
        spawn_local(async move {
            let outcome = transport.send(&request).await;
            gateway.borrow_mut().finish_submit(outcome, &mut toasts);
        });
    })
}

pub fn wire_navigation(page: &Page) -> Result<()> {
    let links = query_all(&page.document, selectors::NAV_LINK)?;
    let pages = query_all(&page.document, selectors::PAGE)?;
    let navigator = Rc::new(PageNavigator::new(links.clone(), pages));

    for (index, link) in links.iter().enumerate() {
        let navigator = Rc::clone(&navigator);
        let window = page.window.clone();
        listen(link.element(), "click", move |_| {
            if navigator.navigate(index).scroll_to_top {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })?;
    }

    Ok(())
}

/// Outcome of [`boot`], one entry per component.
#[derive(Default)]
pub struct BootReport {
    pub wired: Vec<&'static str>,
    pub failed: Vec<(&'static str, FolioError)>,
    /// The mounted toast stack, when its container exists.
    pub toasts: Option<ToastService>,
}

impl BootReport {
    fn record(&mut self, component: &'static str, result: Result<()>) {
        match result {
            Ok(()) => {
                log::debug!("{component} wired");
                self.wired.push(component);
            }
            Err(err) => {
                log::error!("{component} not wired: {err}");
                self.failed.push((component, err));
            }
        }
    }
}

/// Wire every component against the current document. A missing element
/// only halts the component that needs it.
pub fn boot(config: &FolioConfig) -> Result<BootReport> {
    let page = Page::current()?;
    let mut report = BootReport::default();

    report.record("loader", wire_loader(&page, &config.loader));
    report.record("navbar", wire_navbar(&page, &config.navbar));
    report.record("ripple", wire_ripple(&page, &config.ripple));
    report.record("scroll reveal", wire_scroll_reveal(&page, &config.reveal));
    report.record("sidebar", wire_sidebar(&page));
    report.record("testimonials", wire_testimonials(&page));
    report.record("filter", wire_filter(&page));

    match by_id::<HtmlElement>(&page.document, selectors::TOAST_CONTAINER_ID) {
        Ok(container) => {
            let toasts = ToastService::mount(container, &config.toast);
            report.wired.push("toasts");
            report.record(
                "contact form",
                wire_contact_form(&page, &config.mail, toasts.clone()),
            );
            report.toasts = Some(toasts);
        }
        Err(err) => {
            report.record("toasts", Err(err));
            report.record(
                "contact form",
                Err(FolioError::missing(format!(
                    "#{}",
                    selectors::TOAST_CONTAINER_ID
                ))),
            );
        }
    }

    report.record("page navigation", wire_navigation(&page));
    Ok(report)
}
