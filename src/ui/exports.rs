//! Utilities reachable from other scripts on the page, both as module exports
//! and under `window.DOJAUtils`.

use crate::core::validation;
use crate::core::{DeviceType, TrackedEvent};
use crate::ui::contact;
use crate::ui::dom::{self, DomError};
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

/// Name of the global utility object
pub const GLOBAL_NAME: &str = "DOJAUtils";

pub fn current_device_type() -> DeviceType {
    let user_agent = dom::window()
        .ok()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default();
    DeviceType::from_user_agent(&user_agent)
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email(email: &str) -> bool {
    validation::is_valid_email(email)
}

#[wasm_bindgen(js_name = isValidColombianPhone)]
pub fn is_valid_colombian_phone(phone: &str) -> bool {
    validation::is_valid_colombian_phone(phone)
}

#[wasm_bindgen(js_name = formatPhoneNumber)]
pub fn format_phone_number(phone: &str) -> String {
    validation::format_phone_number(phone)
}

#[wasm_bindgen(js_name = getDeviceType)]
pub fn get_device_type() -> String {
    current_device_type().to_string()
}

#[wasm_bindgen(js_name = trackEvent)]
pub fn track_event(category: String, action: String, label: Option<String>) {
    contact::track_event(&TrackedEvent::new(category, action, label));
}

fn set(target: &Object, name: &str, value: &JsValue) -> Result<(), DomError> {
    Reflect::set(target, &JsValue::from_str(name), value)
        .map(|_| ())
        .map_err(|e| DomError::js("Reflect.set", e))
}

/// Publish `window.DOJAUtils`.
pub fn install() -> Result<(), DomError> {
    let window = dom::window()?;
    let utils = Object::new();

    set(
        &utils,
        "isValidEmail",
        &Closure::<dyn Fn(String) -> bool>::new(|email: String| is_valid_email(&email))
            .into_js_value(),
    )?;
    set(
        &utils,
        "isValidColombianPhone",
        &Closure::<dyn Fn(String) -> bool>::new(|phone: String| {
            is_valid_colombian_phone(&phone)
        })
        .into_js_value(),
    )?;
    set(
        &utils,
        "formatPhoneNumber",
        &Closure::<dyn Fn(String) -> String>::new(|phone: String| format_phone_number(&phone))
            .into_js_value(),
    )?;
    set(
        &utils,
        "getDeviceType",
        &Closure::<dyn Fn() -> String>::new(get_device_type).into_js_value(),
    )?;
    set(
        &utils,
        "trackEvent",
        &Closure::<dyn Fn(String, String, Option<String>)>::new(track_event).into_js_value(),
    )?;

    set(&window, GLOBAL_NAME, &utils)
}
