//! Contact-form helpers: email and Colombian phone checks, phone formatting.
//!
//! These are deliberately loose checks meant for inline feedback, not RFC
//! compliance.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static COLOMBIAN_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+57|57)?[0-9]{10}$").expect("valid phone regex"));

static TEN_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{3})([0-9]{3})([0-9]{4})$").expect("valid grouping regex")
});

/// `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Optional `+57`/`57` prefix followed by exactly ten digits. Whitespace
/// anywhere in the input is ignored.
pub fn is_valid_colombian_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    COLOMBIAN_PHONE.is_match(&compact)
}

/// Group a ten-digit number as `ddd ddd dddd`.
///
/// Non-digits are stripped first, so `(300) 123-4567` is accepted. Anything
/// that does not reduce to exactly ten digits is returned unchanged.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    match TEN_DIGITS.captures(&digits) {
        Some(caps) => format!("{} {} {}", &caps[1], &caps[2], &caps[3]),
        None => phone.to_string(),
    }
}
