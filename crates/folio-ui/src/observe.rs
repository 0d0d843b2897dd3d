//! Viewport intersection observers for reveal targets and skill bars.

use std::{cell::RefCell, rc::Rc};

use folio_core::{Result, ScrollReveal, SkillBars, config::RevealConfig};
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{
    node::{ElementNode, js_error, query_all},
    selectors,
};

/// Observe `nodes`; `on_entry` returns `true` to stop observing a target.
fn observe<F>(
    nodes: &[ElementNode],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: F,
) -> Result<()>
where
    F: FnMut(&ElementNode, bool) -> bool + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = ElementNode(entry.target());
                if on_entry(&target, entry.is_intersecting()) {
                    observer.unobserve(target.element());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_error)?;
    for node in nodes {
        observer.observe(node.element());
    }

    // The observer holds the callback for the life of the page.
    callback.forget();
    Ok(())
}

/// Register reveal targets and skill bars. Returns how many of each were
/// registered.
pub fn wire_reveal(document: &Document, config: &RevealConfig) -> Result<(usize, usize)> {
    let targets = query_all(document, selectors::REVEAL_TARGETS)?;
    let reveal = Rc::new(RefCell::new(ScrollReveal::new(targets.clone())));
    observe(
        &targets,
        config.threshold,
        Some(&config.root_margin),
        move |node, intersecting| reveal.borrow_mut().on_intersection(node, intersecting),
    )?;

    let bars = query_all(document, selectors::SKILL_BARS)?;
    let skills = Rc::new(RefCell::new(SkillBars::new(bars.clone())));
    observe(&bars, config.skill_threshold, None, move |node, intersecting| {
        skills.borrow_mut().on_intersection(node, intersecting)
    })?;

    log::debug!(
        "observing {} reveal targets and {} skill bars",
        targets.len(),
        bars.len()
    );
    Ok((targets.len(), bars.len()))
}
