//! Site configuration.
//!
//! Every selector, offset and delay the controller uses lives here. Defaults
//! match the markup shipped with the site; a page may override any subset by
//! embedding a JSON object (see [`CONFIG_ELEMENT_ID`]) which is loaded with
//! [`SiteConfig::from_json`].

use serde::Deserialize;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "doja-config";

/// Inline SVG shown in place of images that failed to load.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMjAwIiBoZWlnaHQ9IjIwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMjAwIiBoZWlnaHQ9IjIwMCIgZmlsbD0iI2Y4ZjlmYSIvPjx0ZXh0IHg9IjUwJSIgeT0iNTAlIiBmb250LWZhbWlseT0iQXJpYWwiIGZvbnQtc2l6ZT0iMTQiIGZpbGw9IiM2Yjc4ODQiIHRleHQtYW5jaG9yPSJtaWRkbGUiIGR5PSIuM2VtIj5JbWFnZW4gbm8gZGlzcG9uaWJsZTwvdGV4dD48L3N2Zz4=";

/// Errors raised while loading a configuration override
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// CSS selectors for every element the controller touches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub navbar: String,
    pub nav_links: String,
    pub nav_collapse_links: String,
    pub navbar_toggler: String,
    pub navbar_collapse: String,
    pub internal_anchors: String,
    pub sections: String,
    pub pill_tabs: String,
    pub pill_nav_links: String,
    pub tab_panes: String,
    pub service_cards: String,
    pub animate_on_scroll: String,
    pub validated_forms: String,
    pub contact_button: String,
    pub images: String,
    pub tooltips: String,
    pub scroll_to_top: String,
    pub preloader: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: ".navbar".to_string(),
            nav_links: ".navbar-nav a".to_string(),
            nav_collapse_links: ".navbar-nav .nav-link".to_string(),
            navbar_toggler: ".navbar-toggler".to_string(),
            navbar_collapse: ".navbar-collapse".to_string(),
            internal_anchors: "a[href^=\"#\"]".to_string(),
            sections: "section[id]".to_string(),
            pill_tabs: "[data-bs-toggle=\"pill\"]".to_string(),
            pill_nav_links: ".nav-link[data-bs-toggle=\"pill\"]".to_string(),
            tab_panes: ".tab-pane".to_string(),
            service_cards: ".service-card".to_string(),
            animate_on_scroll: ".animate-on-scroll".to_string(),
            validated_forms: ".needs-validation".to_string(),
            contact_button: ".whatsapp-float".to_string(),
            images: "img".to_string(),
            tooltips: "[data-bs-toggle=\"tooltip\"]".to_string(),
            scroll_to_top: ".scroll-to-top".to_string(),
            preloader: ".preloader".to_string(),
        }
    }
}

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name used in the "loaded" log line
    pub site_name: String,
    pub selectors: Selectors,
    /// Navbar height assumed when the page has no navbar
    pub navbar_fallback_height: f64,
    /// Gap left between the navbar and a scrolled-to target
    pub anchor_margin: f64,
    /// Extra lead applied to section bounds when picking the active link
    pub section_margin: f64,
    /// Offset past which the navbar gets the `scrolled` class
    pub navbar_scrolled_threshold: f64,
    /// Offset past which the scroll-to-top button is shown
    pub scroll_to_top_threshold: f64,
    /// Path fragment identifying the services page
    pub services_route: String,
    pub tab_activate_delay_ms: u32,
    pub tab_scroll_delay_ms: u32,
    pub preloader_delay_ms: u32,
    pub orientation_settle_ms: u32,
    pub placeholder_image: String,
    pub placeholder_alt: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "DOJA S.A.S".to_string(),
            selectors: Selectors::default(),
            navbar_fallback_height: 80.0,
            anchor_margin: 20.0,
            section_margin: 100.0,
            navbar_scrolled_threshold: 100.0,
            scroll_to_top_threshold: 300.0,
            services_route: "servicios.html".to_string(),
            tab_activate_delay_ms: 100,
            tab_scroll_delay_ms: 200,
            preloader_delay_ms: 300,
            orientation_settle_ms: 100,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            placeholder_alt: "Imagen no disponible".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse an override document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether `path` belongs to the services page
    pub fn is_services_page(&self, path: &str) -> bool {
        path.contains(&self.services_route)
    }
}
