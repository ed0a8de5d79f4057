//! Navbar behaviors: in-page smooth scrolling, active link tracking,
//! scroll styling and mobile menu auto-close.

use std::rc::Rc;

use crate::core::SiteConfig;
use crate::core::geometry::{self, SectionBounds};
use crate::ui::dom::{self, ACTIVE, Attached, DomError, SHOW};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Node};

const SCROLLED: &str = "scrolled";

/// Intercept clicks on `#fragment` links and glide to the target instead of jumping.
pub fn init_smooth_scrolling(config: &Rc<SiteConfig>) -> Result<Attached, DomError> {
    let document = dom::document()?;
    let anchors = dom::query_all(&document, &config.selectors.internal_anchors)?;
    if anchors.is_empty() {
        return Ok(Attached::Skipped);
    }

    for anchor in anchors {
        let config = Rc::clone(config);
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            if let Some(href) = link.get_attribute("href") {
                dom::scroll_to_selector(&config, &href);
            }
        })?;
    }

    Ok(Attached::Wired)
}

/// Mark the nav link of the section currently under the navbar.
///
/// Returns the id of the active section, if any.
pub fn update_active_link(
    document: &Document,
    config: &SiteConfig,
    scroll_y: f64,
) -> Result<Option<String>, DomError> {
    let sections: Vec<SectionBounds> = dom::query_all(document, &config.selectors.sections)?
        .into_iter()
        .filter_map(|section| {
            let top = dom::offset_top(&section)?;
            Some(SectionBounds::new(
                section.id(),
                top,
                section.client_height() as f64,
            ))
        })
        .collect();

    let navbar = dom::navbar_height(document, config);
    let current =
        geometry::active_section(&sections, scroll_y, navbar, config.section_margin).map(str::to_owned);

    for link in dom::query_all(document, &config.selectors.nav_links)? {
        let is_current =
            geometry::link_targets(link.get_attribute("href").as_deref(), current.as_deref());
        let _ = link.class_list().toggle_with_force(ACTIVE, is_current);
    }

    Ok(current)
}

pub fn init_active_section(config: &Rc<SiteConfig>) -> Result<Attached, DomError> {
    let window = dom::window()?;
    let config = Rc::clone(config);

    dom::listen(&window, "scroll", move |_| {
        let (Ok(window), Ok(document)) = (dom::window(), dom::document()) else {
            return;
        };
        let _ = update_active_link(&document, &config, dom::scroll_y(&window));
    })?;

    Ok(Attached::Wired)
}

/// Toggle the `scrolled` class once the page leaves the top.
pub fn init_navbar_scroll(config: &Rc<SiteConfig>) -> Result<Attached, DomError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let Some(navbar) = dom::query(&document, &config.selectors.navbar)? else {
        return Ok(Attached::Skipped);
    };

    let threshold = config.navbar_scrolled_threshold;
    let scroller = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let scrolled = geometry::past_threshold(dom::scroll_y(&scroller), threshold);
        let _ = navbar.class_list().toggle_with_force(SCROLLED, scrolled);
    })?;

    Ok(Attached::Wired)
}

/// Close the collapsed mobile menu after navigating or clicking elsewhere.
///
/// The Bootstrap toggler is clicked rather than editing the collapse state
/// directly, so Bootstrap's own bookkeeping stays consistent.
pub fn init_mobile_menu(config: &Rc<SiteConfig>) -> Result<Attached, DomError> {
    let document = dom::document()?;
    let toggler = dom::query(&document, &config.selectors.navbar_toggler)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let collapse = dom::query(&document, &config.selectors.navbar_collapse)?;

    let (Some(toggler), Some(collapse)) = (toggler, collapse) else {
        return Ok(Attached::Skipped);
    };

    for link in dom::query_all(&document, &config.selectors.nav_collapse_links)? {
        let toggler = toggler.clone();
        let collapse = collapse.clone();
        dom::listen(&link, "click", move |_| {
            if collapse.class_list().contains(SHOW) {
                toggler.click();
            }
        })?;
    }

    dom::listen(&document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = collapse.contains(target.as_ref()) || toggler.contains(target.as_ref());

        if !inside && collapse.class_list().contains(SHOW) {
            toggler.click();
        }
    })?;

    Ok(Attached::Wired)
}
