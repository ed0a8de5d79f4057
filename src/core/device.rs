//! Coarse device classification from the user agent string.

use derive_more::Display;
use regex::Regex;
use std::sync::LazyLock;

static TABLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)tablet|ipad|playbook|silk").expect("valid tablet regex"));

static MOBILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)mobile|iphone|ipod|android|blackberry|opera|mini|windows\sce|palm|smartphone|iemobile",
    )
    .expect("valid mobile regex")
});

/// Device class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
pub enum DeviceType {
    #[display("tablet")]
    Tablet,
    #[display("mobile")]
    Mobile,
    #[default]
    #[display("desktop")]
    Desktop,
}

impl DeviceType {
    /// Classify a user agent. Tablet markers are checked before mobile ones,
    /// so an Android tablet advertising "Tablet" is not reported as mobile.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if TABLET.is_match(user_agent) {
            DeviceType::Tablet
        } else if MOBILE.is_match(user_agent) {
            DeviceType::Mobile
        } else {
            DeviceType::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Tablet => "tablet",
            DeviceType::Mobile => "mobile",
            DeviceType::Desktop => "desktop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X) AppleWebKit/605.1.15";
    const IPHONE: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
    const ANDROID_PHONE: &str =
        "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36";
    const KINDLE: &str = "Mozilla/5.0 (Linux; U; Android 4.0.3; KFTT Build/IML74K) Silk/3.4";
    const DESKTOP: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

    #[test]
    fn test_tablets() {
        assert_eq!(DeviceType::from_user_agent(IPAD), DeviceType::Tablet);
        // Android, but Silk wins because tablets are checked first
        assert_eq!(DeviceType::from_user_agent(KINDLE), DeviceType::Tablet);
        assert_eq!(DeviceType::from_user_agent("PlayBook"), DeviceType::Tablet);
    }

    #[test]
    fn test_mobiles() {
        assert_eq!(DeviceType::from_user_agent(IPHONE), DeviceType::Mobile);
        assert_eq!(DeviceType::from_user_agent(ANDROID_PHONE), DeviceType::Mobile);
        assert_eq!(DeviceType::from_user_agent("Windows CE"), DeviceType::Mobile);
        assert_eq!(DeviceType::from_user_agent("Opera/9.80"), DeviceType::Mobile);
    }

    #[test]
    fn test_desktop() {
        assert_eq!(DeviceType::from_user_agent(DESKTOP), DeviceType::Desktop);
        assert_eq!(DeviceType::from_user_agent(""), DeviceType::Desktop);
    }

    #[test]
    fn test_display_matches_as_str() {
        for device in [DeviceType::Tablet, DeviceType::Mobile, DeviceType::Desktop] {
            assert_eq!(device.to_string(), device.as_str());
        }
    }
}
