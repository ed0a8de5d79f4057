//! Bootstrap pill tabs: scroll to the shown panel and keep the services page
//! URL in sync with the selected tab.

use std::rc::Rc;

use crate::core::SiteConfig;
use crate::core::tabs::{fragment_tab_id, panel_id_from_target, tab_button_id, tab_fragment};
use crate::ui::dom::{self, ACTIVE, Attached, DomError, SHOW};
use gloo_timers::callback::Timeout;
use leptos::logging::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Element, Event};

const TAB_SHOWN: &str = "shown.bs.tab";

pub fn init_tab_navigation(config: &Rc<SiteConfig>) -> Result<Attached, DomError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let tabs = dom::query_all(&document, &config.selectors.pill_tabs)?;

    for tab in &tabs {
        let config = Rc::clone(config);
        dom::listen(tab, TAB_SHOWN, move |event| on_tab_shown(&config, &event))?;
    }

    let location = window.location();
    let on_services = location
        .pathname()
        .map(|path| config.is_services_page(&path))
        .unwrap_or(false);
    let hash = location.hash().unwrap_or_default();

    let deep_link = on_services
        .then(|| fragment_tab_id(&hash))
        .flatten()
        .map(str::to_owned);

    if let Some(tab_id) = &deep_link {
        schedule_activation(config, tab_id.clone());
    }

    if tabs.is_empty() && deep_link.is_none() {
        Ok(Attached::Skipped)
    } else {
        Ok(Attached::Wired)
    }
}

fn on_tab_shown(config: &SiteConfig, event: &Event) {
    let Some(target_selector) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.get_attribute("data-bs-target"))
    else {
        return;
    };

    dom::scroll_to_selector(config, &target_selector);

    let Ok(window) = dom::window() else { return };
    let on_services = window
        .location()
        .pathname()
        .map(|path| config.is_services_page(&path))
        .unwrap_or(false);

    if on_services {
        if let Ok(history) = window.history() {
            let fragment = tab_fragment(panel_id_from_target(&target_selector));
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&fragment));
        }
    }
}

/// Activate the tab named in the URL once Bootstrap has set up its own tabs,
/// then scroll to it after layout settles.
fn schedule_activation(config: &Rc<SiteConfig>, tab_id: String) {
    let config = Rc::clone(config);
    Timeout::new(config.tab_activate_delay_ms, move || {
        match activate_tab(&config, &tab_id) {
            Ok(true) => {}
            Ok(false) => warn!("No tab matches #{}", tab_id),
            Err(err) => warn!("Could not activate tab #{}: {}", tab_id, err),
        }
    })
    .forget();
}

/// Force `tab_id` to be the shown pill, bypassing Bootstrap's trigger.
///
/// Returns `false` when either the button or the panel is missing.
pub fn activate_tab(config: &Rc<SiteConfig>, tab_id: &str) -> Result<bool, DomError> {
    let document = dom::document()?;
    let (Some(button), Some(panel)) = (
        document.get_element_by_id(&tab_button_id(tab_id)),
        document.get_element_by_id(tab_id),
    ) else {
        return Ok(false);
    };

    for tab in dom::query_all(&document, &config.selectors.pill_nav_links)? {
        let _ = tab.class_list().remove_1(ACTIVE);
    }
    for pane in dom::query_all(&document, &config.selectors.tab_panes)? {
        let _ = pane.class_list().remove_2(SHOW, ACTIVE);
    }

    let _ = button.class_list().add_1(ACTIVE);
    let _ = panel.class_list().add_2(SHOW, ACTIVE);

    let config = Rc::clone(config);
    Timeout::new(config.tab_scroll_delay_ms, move || {
        let (Ok(window), Ok(document)) = (dom::window(), dom::document()) else {
            return;
        };
        let Some(top) = dom::offset_top(&panel) else {
            return;
        };
        let navbar = dom::navbar_height(&document, &config);
        dom::smooth_scroll_to(
            &window,
            crate::core::scroll_target(top, navbar, config.anchor_margin),
        );
    })
    .forget();

    Ok(true)
}
