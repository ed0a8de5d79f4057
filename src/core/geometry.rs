//! Scroll geometry: target offsets and active-section selection.

/// Resolve the navbar height, falling back when the page has no navbar.
pub fn navbar_height(measured: Option<f64>, fallback: f64) -> f64 {
    measured.unwrap_or(fallback)
}

/// Scroll offset that brings an element at `offset_top` just below the navbar.
pub fn scroll_target(offset_top: f64, navbar_height: f64, margin: f64) -> f64 {
    offset_top - navbar_height - margin
}

/// Raw geometry of an identified page section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
            height,
        }
    }

    /// Half-open range `[start, end)` in which this section counts as current.
    pub fn range(&self, navbar_height: f64, margin: f64) -> (f64, f64) {
        let start = self.offset_top - navbar_height - margin;
        (start, start + self.height)
    }

    pub fn contains(&self, scroll_y: f64, navbar_height: f64, margin: f64) -> bool {
        let (start, end) = self.range(navbar_height, margin);
        scroll_y >= start && scroll_y < end
    }
}

/// Pick the section the reader is currently in.
///
/// Every section is scanned; when ranges overlap the last one in document
/// order wins. Returns `None` when no range contains `scroll_y`.
pub fn active_section(
    sections: &[SectionBounds],
    scroll_y: f64,
    navbar_height: f64,
    margin: f64,
) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(scroll_y, navbar_height, margin))
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` points at section `id`
pub fn link_targets(href: Option<&str>, id: Option<&str>) -> bool {
    match (href, id) {
        (Some(href), Some(id)) => href.strip_prefix('#') == Some(id),
        _ => false,
    }
}

/// Strictly-past-threshold test used for the navbar and scroll-to-top toggles.
pub fn past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("inicio", 0.0, 600.0),
            SectionBounds::new("servicios", 600.0, 800.0),
            SectionBounds::new("contact", 1400.0, 500.0),
        ]
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(1000.0, 80.0, 20.0), 900.0);
        assert_eq!(scroll_target(0.0, 80.0, 20.0), -100.0);
    }

    #[test]
    fn test_navbar_height_fallback() {
        assert_eq!(navbar_height(Some(64.0), 80.0), 64.0);
        assert_eq!(navbar_height(None, 80.0), 80.0);
    }

    #[test]
    fn test_active_section_basic() {
        let sections = page();
        // "servicios" range: [600 - 80 - 100, +800) = [420, 1220)
        assert_eq!(active_section(&sections, 500.0, 80.0, 100.0), Some("servicios"));
        assert_eq!(active_section(&sections, 100.0, 80.0, 100.0), Some("inicio"));
        assert_eq!(active_section(&sections, 1300.0, 80.0, 100.0), Some("contact"));
    }

    #[test]
    fn test_half_open_bounds() {
        let sections = vec![SectionBounds::new("about", 1000.0, 400.0)];
        // [820, 1220)
        assert_eq!(active_section(&sections, 820.0, 80.0, 100.0), Some("about"));
        assert_eq!(active_section(&sections, 1219.5, 80.0, 100.0), Some("about"));
        assert_eq!(active_section(&sections, 1220.0, 80.0, 100.0), None);
        assert_eq!(active_section(&sections, 819.9, 80.0, 100.0), None);
    }

    #[test]
    fn test_last_overlapping_section_wins() {
        let sections = vec![
            SectionBounds::new("first", 0.0, 2000.0),
            SectionBounds::new("nested", 500.0, 200.0),
            SectionBounds::new("after", 3000.0, 100.0),
        ];
        assert_eq!(active_section(&sections, 400.0, 80.0, 100.0), Some("nested"));
        assert_eq!(active_section(&sections, 1000.0, 80.0, 100.0), Some("first"));
    }

    #[test]
    fn test_no_sections() {
        assert_eq!(active_section(&[], 300.0, 80.0, 100.0), None);
    }

    #[test]
    fn test_active_section_is_idempotent() {
        let sections = page();
        let first = active_section(&sections, 700.0, 80.0, 100.0);
        let second = active_section(&sections, 700.0, 80.0, 100.0);
        assert_eq!(first, second);
        assert_eq!(first, Some("servicios"));
    }

    #[test]
    fn test_link_targets() {
        assert!(link_targets(Some("#contact"), Some("contact")));
        assert!(!link_targets(Some("contact"), Some("contact")));
        assert!(!link_targets(Some("#contact"), Some("about")));
        assert!(!link_targets(Some("#contact"), None));
        assert!(!link_targets(None, Some("contact")));
        assert!(!link_targets(Some("/index.html#contact"), Some("contact")));
    }

    #[test]
    fn test_past_threshold() {
        assert!(!past_threshold(100.0, 100.0));
        assert!(past_threshold(100.5, 100.0));
        assert!(!past_threshold(0.0, 300.0));
        assert!(past_threshold(301.0, 300.0));
    }
}
