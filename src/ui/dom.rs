//! Thin helpers over `web-sys` shared by every initializer.

use crate::core::SiteConfig;
use crate::core::geometry;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window,
};

/// Failures talking to the browser
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl DomError {
    pub fn js(context: &'static str, err: JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{:?}", err));
        DomError::Js { context, message }
    }
}

/// Outcome of an initializer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attached {
    /// Listeners were registered
    Wired,
    /// The elements it needs are not on this page
    Skipped,
}

pub const ACTIVE: &str = "active";
pub const SHOW: &str = "show";

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, DomError> {
    document
        .query_selector(selector)
        .map_err(|e| DomError::js("querySelector", e))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| DomError::js("querySelectorAll", e))?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| DomError::js("addEventListener", e))?;

    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

pub fn offset_top(element: &Element) -> Option<f64> {
    element
        .dyn_ref::<HtmlElement>()
        .map(|el| el.offset_top() as f64)
}

/// Current navbar height, or the configured fallback when there is no navbar.
pub fn navbar_height(document: &Document, config: &SiteConfig) -> f64 {
    let measured = query(document, &config.selectors.navbar)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64);

    geometry::navbar_height(measured, config.navbar_fallback_height)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Scroll offset that lands `selector` just below the navbar.
///
/// `None` when the selector is invalid (a bare `#`, say) or matches nothing.
pub fn anchor_target_offset(
    document: &Document,
    config: &SiteConfig,
    selector: &str,
) -> Option<f64> {
    let target = document.query_selector(selector).ok().flatten()?;
    let top = offset_top(&target)?;

    Some(geometry::scroll_target(
        top,
        navbar_height(document, config),
        config.anchor_margin,
    ))
}

/// Smooth-scroll to the element matched by `selector`; no-op if it is absent.
pub fn scroll_to_selector(config: &SiteConfig, selector: &str) -> bool {
    let (Ok(window), Ok(document)) = (window(), document()) else {
        return false;
    };

    match anchor_target_offset(&document, config, selector) {
        Some(top) => {
            smooth_scroll_to(&window, top);
            true
        }
        None => false,
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}
