//! Scroll position recovery after device rotation.

use std::rc::Rc;

use crate::core::SiteConfig;
use crate::ui::dom::{self, Attached, DomError};
use gloo_timers::callback::Timeout;

/// Re-apply the scroll position shortly after a rotation. Some mobile
/// browsers report stale geometry right after `orientationchange`.
pub fn init_orientation_recovery(config: &Rc<SiteConfig>) -> Result<Attached, DomError> {
    let window = dom::window()?;
    let settle_ms = config.orientation_settle_ms;

    dom::listen(&window, "orientationchange", move |_| {
        Timeout::new(settle_ms, || {
            let Ok(window) = dom::window() else { return };
            let x = window.scroll_x().unwrap_or(0.0);
            let y = window.scroll_y().unwrap_or(0.0);
            window.scroll_to_with_x_and_y(x, y);
        })
        .forget();
    })?;

    Ok(Attached::Wired)
}
