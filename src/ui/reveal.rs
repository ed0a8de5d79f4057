//! Fade-in of service cards and `.animate-on-scroll` elements as they enter
//! the viewport.

use std::rc::Rc;

use crate::core::SiteConfig;
use crate::core::reveal::{
    ANIMATE_ON_SCROLL, HIDDEN_OPACITY, OBSERVER_OPTIONS, RevealStyle, SERVICE_CARD,
    VISIBLE_OPACITY, VISIBLE_TRANSFORM,
};
use crate::ui::dom::{self, Attached, DomError};
use js_sys::{Array, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

fn hide(element: &Element, style: &RevealStyle, index: usize) {
    dom::set_style(element, "opacity", HIDDEN_OPACITY);
    dom::set_style(element, "transform", &style.hidden_transform());
    dom::set_style(element, "transition", &style.transition(index));
}

fn show(element: &Element) {
    dom::set_style(element, "opacity", VISIBLE_OPACITY);
    dom::set_style(element, "transform", VISIBLE_TRANSFORM);
}

pub fn observer_supported() -> bool {
    dom::window()
        .ok()
        .and_then(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false)
}

pub fn init_scroll_animations(config: &Rc<SiteConfig>) -> Result<Attached, DomError> {
    let document = dom::document()?;
    let cards = dom::query_all(&document, &config.selectors.service_cards)?;
    let extras = dom::query_all(&document, &config.selectors.animate_on_scroll)?;

    if cards.is_empty() && extras.is_empty() {
        return Ok(Attached::Skipped);
    }

    if !observer_supported() {
        // Nothing has been hidden yet; just make sure cards are visible
        cards.iter().for_each(show);
        return Ok(Attached::Wired);
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    show(&target);
                    // One-way: revealed elements stay revealed
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(OBSERVER_OPTIONS.threshold));
    options.set_root_margin(OBSERVER_OPTIONS.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| DomError::js("IntersectionObserver", e))?;
    callback.forget();

    for (group, style) in [(&cards, SERVICE_CARD), (&extras, ANIMATE_ON_SCROLL)] {
        for (index, element) in group.iter().enumerate() {
            hide(element, &style, index);
            observer.observe(element);
        }
    }

    Ok(Attached::Wired)
}
