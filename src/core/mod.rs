//! Browser-independent logic for the site controller

pub mod analytics;
pub mod config;
pub mod device;
pub mod geometry;
pub mod reveal;
pub mod startup;
pub mod tabs;
#[cfg(test)]
mod tests;
pub mod validation;

pub use analytics::TrackedEvent;
pub use config::{ConfigError, SiteConfig};
pub use device::DeviceType;
pub use geometry::{SectionBounds, active_section, scroll_target};
pub use validation::{format_phone_number, is_valid_colombian_phone, is_valid_email};
