//! Browser side of the controller.
//!
//! Start-up runs in two phases. Content-phase initializers need only the
//! parsed DOM; load-phase ones wait for images and styles. The module may
//! start after either event has already fired, so `document.readyState`
//! decides whether to run a phase now or wait for its event.

pub mod contact;
pub mod deferred;
pub mod dom;
pub mod exports;
pub mod forms;
pub mod images;
pub mod navigation;
pub mod reveal;
pub mod tabs;
pub mod viewport;

use std::rc::Rc;

use crate::core::SiteConfig;
use crate::core::config::CONFIG_ELEMENT_ID;
use crate::core::startup::ReadyState;
use dom::{Attached, DomError};
use leptos::logging::{log, warn};

type Initializer = fn(&Rc<SiteConfig>) -> Result<Attached, DomError>;

const CONTENT_PHASE: [(&str, Initializer); 9] = [
    ("smooth scrolling", navigation::init_smooth_scrolling),
    ("active section", navigation::init_active_section),
    ("tab navigation", tabs::init_tab_navigation),
    ("scroll animations", reveal::init_scroll_animations),
    ("form validation", forms::init_form_validation),
    ("mobile menu", navigation::init_mobile_menu),
    ("contact button", contact::init_contact_button),
    ("navbar scroll", navigation::init_navbar_scroll),
    ("image fallback", images::init_image_fallback),
];

const LOAD_PHASE: [(&str, Initializer); 3] = [
    ("tooltips", deferred::init_tooltips),
    ("scroll to top", deferred::init_scroll_to_top),
    ("preloader", deferred::dismiss_preloader),
];

/// Read overrides from the page's JSON config element, if any.
pub fn load_config() -> SiteConfig {
    let json = dom::document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match json {
        Some(json) => SiteConfig::from_json(&json).unwrap_or_else(|err| {
            warn!("{}; using defaults", err);
            SiteConfig::default()
        }),
        None => SiteConfig::default(),
    }
}

fn run_phase(phase: &[(&str, Initializer)], config: &Rc<SiteConfig>) {
    for (name, init) in phase {
        match init(config) {
            Ok(Attached::Wired) => {}
            Ok(Attached::Skipped) => log!("{}: nothing to wire on this page", name),
            Err(err) => warn!("{} disabled: {}", name, err),
        }
    }
}

pub fn content_phase(config: &Rc<SiteConfig>) {
    run_phase(&CONTENT_PHASE, config);
}

pub fn load_phase(config: &Rc<SiteConfig>) {
    run_phase(&LOAD_PHASE, config);
    log!("{} website loaded successfully", config.site_name);
}

/// Attach every behavior to the current page.
pub fn mount() {
    let config = Rc::new(load_config());

    if let Err(err) = exports::install() {
        warn!("Could not publish {}: {}", exports::GLOBAL_NAME, err);
    }
    if let Err(err) = viewport::init_orientation_recovery(&config) {
        warn!("orientation recovery disabled: {}", err);
    }

    let (window, document) = match (dom::window(), dom::document()) {
        (Ok(window), Ok(document)) => (window, document),
        (Err(err), _) | (_, Err(err)) => {
            warn!("Site controller not started: {}", err);
            return;
        }
    };

    let state = ReadyState::parse(&document.ready_state());

    if !state.content_ready() {
        let content_config = Rc::clone(&config);
        if let Err(err) = dom::listen(&document, "DOMContentLoaded", move |_| {
            content_phase(&content_config)
        }) {
            warn!("Could not wait for DOMContentLoaded: {}", err);
        }
    } else {
        content_phase(&config);
    }

    if state.loaded() {
        load_phase(&config);
    } else {
        let loaded_config = Rc::clone(&config);
        if let Err(err) = dom::listen(&window, "load", move |_| load_phase(&loaded_config)) {
            warn!("Could not wait for load: {}", err);
        }
    }
}
