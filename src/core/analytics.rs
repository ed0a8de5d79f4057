//! Analytics event payloads.

use serde::Serialize;

/// A user interaction worth reporting
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

/// Parameters object passed as the third argument of `gtag("event", ...)`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GtagParams<'a> {
    pub event_category: &'a str,
    pub event_label: &'a str,
}

impl TrackedEvent {
    /// A missing label is reported as the empty string.
    pub fn new(
        category: impl Into<String>,
        action: impl Into<String>,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: label.map(Into::into).unwrap_or_default(),
        }
    }

    /// Click on the floating WhatsApp button
    pub fn whatsapp_click() -> Self {
        Self::new("Contact", "WhatsApp Click", Some("Float Button"))
    }

    pub fn gtag_params(&self) -> GtagParams<'_> {
        GtagParams {
            event_category: &self.category,
            event_label: &self.label,
        }
    }

    /// Console line written for every tracked event
    pub fn log_line(&self) -> String {
        format!(
            "Event tracked: {} - {} - {}",
            self.category, self.action, self.label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_click() {
        let event = TrackedEvent::whatsapp_click();
        assert_eq!(event.category, "Contact");
        assert_eq!(event.action, "WhatsApp Click");
        assert_eq!(event.label, "Float Button");
        assert_eq!(
            event.log_line(),
            "Event tracked: Contact - WhatsApp Click - Float Button"
        );
    }

    #[test]
    fn test_missing_label() {
        let event = TrackedEvent::new("Form", "Submit", None::<String>);
        assert_eq!(event.label, "");
        assert_eq!(event.log_line(), "Event tracked: Form - Submit - ");
    }

    #[test]
    fn test_gtag_params_shape() {
        let event = TrackedEvent::whatsapp_click();
        let json = serde_json::to_value(event.gtag_params()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "event_category": "Contact",
                "event_label": "Float Button",
            })
        );
    }
}
