//! Placeholder for images that fail to load.

use std::rc::Rc;

use crate::core::SiteConfig;
use crate::ui::dom::{self, Attached, DomError};
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

pub fn apply_placeholder(img: &HtmlImageElement, config: &SiteConfig) {
    // The placeholder is inline and cannot fail, but never loop on it
    if img.src() == config.placeholder_image {
        return;
    }
    img.set_src(&config.placeholder_image);
    img.set_alt(&config.placeholder_alt);
}

/// A finished image with no intrinsic width. That is either a broken image
/// whose `error` fired before the listener existed, or a sized-by-`viewBox`
/// SVG that loaded fine; reloading tells the two apart.
fn needs_reload(img: &HtmlImageElement, config: &SiteConfig) -> bool {
    let src = img.src();
    img.complete() && img.natural_width() == 0 && !src.is_empty() && src != config.placeholder_image
}

pub fn init_image_fallback(config: &Rc<SiteConfig>) -> Result<Attached, DomError> {
    let document = dom::document()?;
    let images: Vec<HtmlImageElement> = dom::query_all(&document, &config.selectors.images)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
        .collect();

    if images.is_empty() {
        return Ok(Attached::Skipped);
    }

    for img in images {
        let reload = needs_reload(&img, config);

        let handler_config = Rc::clone(config);
        let broken = img.clone();
        dom::listen(&img, "error", move |_| {
            apply_placeholder(&broken, &handler_config)
        })?;

        if reload {
            // Re-assigning `src` restarts the fetch, so a broken image fires
            // `error` again, now with the listener attached
            img.set_src(&img.src());
        }
    }

    Ok(Attached::Wired)
}
