//! DOJA S.A.S - Site interaction controller
//!
//! Interactivity for the DOJA marketing site, compiled to WebAssembly and
//! attached to the static Bootstrap markup served with it.

pub mod core;
#[cfg(feature = "hydrate")]
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    ui::mount();
}
