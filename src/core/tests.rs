#[cfg(test)]
mod tests {
    use crate::core::geometry::{link_targets, navbar_height};
    use crate::core::{SectionBounds, SiteConfig, active_section, scroll_target};

    #[test]
    fn test_anchor_click_to_contact() {
        let config = SiteConfig::default();

        // #contact sits 1000px down, navbar is 80px tall
        let navbar = navbar_height(Some(80.0), config.navbar_fallback_height);
        let target = scroll_target(1000.0, navbar, config.anchor_margin);

        assert_eq!(target, 900.0);
    }

    #[test]
    fn test_anchor_click_without_navbar() {
        let config = SiteConfig::default();

        let navbar = navbar_height(None, config.navbar_fallback_height);
        let target = scroll_target(1000.0, navbar, config.anchor_margin);

        assert_eq!(target, 900.0);
    }

    #[test]
    fn test_exactly_one_link_marked() {
        let config = SiteConfig::default();
        let sections = vec![
            SectionBounds::new("inicio", 0.0, 700.0),
            SectionBounds::new("nosotros", 700.0, 600.0),
            SectionBounds::new("contacto", 1300.0, 400.0),
        ];
        let links = ["#inicio", "#nosotros", "#contacto", "servicios.html"];

        let marked = |scroll_y: f64| -> Vec<&'static str> {
            let current = active_section(&sections, scroll_y, 80.0, config.section_margin);
            links
                .iter()
                .copied()
                .filter(|href| link_targets(Some(*href), current))
                .collect()
        };

        assert_eq!(marked(600.0), vec!["#nosotros"]);
        // Recomputing at the same offset does not accumulate marks
        assert_eq!(marked(600.0), vec!["#nosotros"]);
        assert_eq!(marked(1200.0), vec!["#contacto"]);
        assert!(marked(5000.0).is_empty());
    }

    #[test]
    fn test_section_lower_bound_included() {
        let config = SiteConfig::default();
        let sections = vec![SectionBounds::new("servicios", 900.0, 500.0)];
        let (start, end) = sections[0].range(80.0, config.section_margin);

        assert_eq!(start, 720.0);
        assert_eq!(
            active_section(&sections, start, 80.0, config.section_margin),
            Some("servicios")
        );
        assert_eq!(
            active_section(&sections, end, 80.0, config.section_margin),
            None
        );
    }
}
