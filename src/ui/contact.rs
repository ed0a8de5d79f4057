//! Floating WhatsApp button and analytics reporting.

use std::rc::Rc;

use crate::core::{SiteConfig, TrackedEvent};
use crate::ui::dom::{self, Attached, DomError};
use js_sys::{Function, Reflect};
use leptos::logging::{log, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Report `event` to `gtag` when the page loads it, and always to the console.
pub fn track_event(event: &TrackedEvent) {
    let gtag = dom::window()
        .ok()
        .and_then(|w| Reflect::get(&w, &JsValue::from_str("gtag")).ok())
        .and_then(|f| f.dyn_into::<Function>().ok());

    if let Some(gtag) = gtag {
        match serde_wasm_bindgen::to_value(&event.gtag_params()) {
            Ok(params) => {
                let _ = gtag.call3(
                    &JsValue::NULL,
                    &JsValue::from_str("event"),
                    &JsValue::from_str(&event.action),
                    &params,
                );
            }
            Err(err) => warn!("Could not encode analytics params: {}", err),
        }
    }

    log!("{}", event.log_line());
}

pub fn init_contact_button(config: &Rc<SiteConfig>) -> Result<Attached, DomError> {
    let document = dom::document()?;
    let Some(button) = dom::query(&document, &config.selectors.contact_button)? else {
        return Ok(Attached::Skipped);
    };

    let hovered = button.clone();
    dom::listen(&button, "mouseenter", move |_| {
        dom::set_style(&hovered, "transform", "scale(1.1)");
    })?;

    let left = button.clone();
    dom::listen(&button, "mouseleave", move |_| {
        dom::set_style(&left, "transform", "scale(1)");
    })?;

    dom::listen(&button, "click", |_| {
        track_event(&TrackedEvent::whatsapp_click());
    })?;

    Ok(Attached::Wired)
}
