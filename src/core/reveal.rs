//! Styling for scroll-triggered reveal animations.

/// How one group of elements fades in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    /// Initial downward shift, in pixels
    pub offset_px: u32,
    /// Transition duration, in seconds
    pub duration_s: f64,
    /// Extra delay per element index, in seconds
    pub stagger_s: f64,
}

/// Service cards: short, quick stagger
pub const SERVICE_CARD: RevealStyle = RevealStyle {
    offset_px: 20,
    duration_s: 0.6,
    stagger_s: 0.1,
};

/// Generic `.animate-on-scroll` elements
pub const ANIMATE_ON_SCROLL: RevealStyle = RevealStyle {
    offset_px: 30,
    duration_s: 0.8,
    stagger_s: 0.2,
};

pub const HIDDEN_OPACITY: &str = "0";
pub const VISIBLE_OPACITY: &str = "1";
pub const VISIBLE_TRANSFORM: &str = "translateY(0)";

/// Intersection observer settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

pub const OBSERVER_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

impl RevealStyle {
    pub fn hidden_transform(&self) -> String {
        format!("translateY({}px)", self.offset_px)
    }

    pub fn delay(&self, index: usize) -> f64 {
        // Round to avoid 0.30000000000000004 in the emitted CSS
        (index as f64 * self.stagger_s * 1000.0).round() / 1000.0
    }

    /// CSS `transition` value for the element at `index` within its group
    pub fn transition(&self, index: usize) -> String {
        let delay = self.delay(index);
        format!(
            "opacity {d}s ease {delay}s, transform {d}s ease {delay}s",
            d = self.duration_s
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_card_transition() {
        assert_eq!(
            SERVICE_CARD.transition(0),
            "opacity 0.6s ease 0s, transform 0.6s ease 0s"
        );
        assert_eq!(
            SERVICE_CARD.transition(3),
            "opacity 0.6s ease 0.3s, transform 0.6s ease 0.3s"
        );
    }

    #[test]
    fn test_animate_on_scroll_transition() {
        assert_eq!(
            ANIMATE_ON_SCROLL.transition(1),
            "opacity 0.8s ease 0.2s, transform 0.8s ease 0.2s"
        );
        assert_eq!(
            ANIMATE_ON_SCROLL.transition(7),
            "opacity 0.8s ease 1.4s, transform 0.8s ease 1.4s"
        );
    }

    #[test]
    fn test_hidden_transform() {
        assert_eq!(SERVICE_CARD.hidden_transform(), "translateY(20px)");
        assert_eq!(ANIMATE_ON_SCROLL.hidden_transform(), "translateY(30px)");
    }

    #[test]
    fn test_observer_options() {
        assert_eq!(OBSERVER_OPTIONS.threshold, 0.1);
        assert_eq!(OBSERVER_OPTIONS.root_margin, "0px 0px -50px 0px");
    }
}
