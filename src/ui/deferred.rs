//! Behaviors started once the page has fully loaded: Bootstrap tooltips,
//! the scroll-to-top button and the preloader overlay.

use std::rc::Rc;

use crate::core::SiteConfig;
use crate::core::geometry;
use crate::ui::dom::{self, Attached, DomError, SHOW};
use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// `window.bootstrap.Tooltip`, if Bootstrap's bundle is on the page
fn tooltip_constructor() -> Option<Function> {
    let window = dom::window().ok()?;
    let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap")).ok()?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return None;
    }
    Reflect::get(&bootstrap, &JsValue::from_str("Tooltip"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

pub fn init_tooltips(config: &Rc<SiteConfig>) -> Result<Attached, DomError> {
    let Some(tooltip) = tooltip_constructor() else {
        return Ok(Attached::Skipped);
    };

    let document = dom::document()?;
    let triggers = dom::query_all(&document, &config.selectors.tooltips)?;
    if triggers.is_empty() {
        return Ok(Attached::Skipped);
    }

    for trigger in triggers {
        Reflect::construct(&tooltip, &Array::of1(&trigger))
            .map_err(|e| DomError::js("bootstrap.Tooltip", e))?;
    }

    Ok(Attached::Wired)
}

pub fn init_scroll_to_top(config: &Rc<SiteConfig>) -> Result<Attached, DomError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let Some(button) = dom::query(&document, &config.selectors.scroll_to_top)? else {
        return Ok(Attached::Skipped);
    };

    let threshold = config.scroll_to_top_threshold;
    let scroller = window.clone();
    let shown = button.clone();
    dom::listen(&window, "scroll", move |_| {
        let visible = geometry::past_threshold(dom::scroll_y(&scroller), threshold);
        let _ = shown.class_list().toggle_with_force(SHOW, visible);
    })?;

    dom::listen(&button, "click", move |event| {
        event.prevent_default();
        dom::smooth_scroll_to(&window, 0.0);
    })?;

    Ok(Attached::Wired)
}

/// Fade the preloader out, then drop it from layout once the fade finishes.
pub fn dismiss_preloader(config: &Rc<SiteConfig>) -> Result<Attached, DomError> {
    let document = dom::document()?;
    let Some(preloader) = dom::query(&document, &config.selectors.preloader)? else {
        return Ok(Attached::Skipped);
    };

    dom::set_style(&preloader, "opacity", "0");
    Timeout::new(config.preloader_delay_ms, move || {
        dom::set_style(&preloader, "display", "none");
    })
    .forget();

    Ok(Attached::Wired)
}
