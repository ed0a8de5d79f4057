//! Submit guard for forms using Bootstrap's validation styles.

use std::rc::Rc;

use crate::core::SiteConfig;
use crate::ui::dom::{self, Attached, DomError};
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

const WAS_VALIDATED: &str = "was-validated";

pub fn init_form_validation(config: &Rc<SiteConfig>) -> Result<Attached, DomError> {
    let document = dom::document()?;
    let forms: Vec<HtmlFormElement> = dom::query_all(&document, &config.selectors.validated_forms)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
        .collect();

    if forms.is_empty() {
        return Ok(Attached::Skipped);
    }

    for form in forms {
        let guarded = form.clone();
        dom::listen(&form, "submit", move |event| {
            if !guarded.check_validity() {
                event.prevent_default();
                event.stop_propagation();
            }
            let _ = guarded.class_list().add_1(WAS_VALIDATED);
        })?;
    }

    Ok(Attached::Wired)
}
