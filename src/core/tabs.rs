//! Pill-tab identifiers and URL fragments.

/// Tab id named by a location hash such as `#consultoria`.
///
/// Returns `None` for an empty hash or a bare `#`.
pub fn fragment_tab_id(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    (!id.is_empty()).then_some(id)
}

/// Id of the button that shows panel `tab_id`
pub fn tab_button_id(tab_id: &str) -> String {
    format!("{tab_id}-tab")
}

/// Fragment written to the URL when panel `tab_id` is shown
pub fn tab_fragment(tab_id: &str) -> String {
    format!("#{tab_id}")
}

/// Panel id referenced by a `data-bs-target` selector like `#consultoria`
pub fn panel_id_from_target(target: &str) -> &str {
    target.strip_prefix('#').unwrap_or(target)
}
