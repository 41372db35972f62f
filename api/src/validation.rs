//! Input validation for clip requests.
//!
//! Both checks are advisory: they gate the submit affordance, while the
//! clipping server remains the authority on what it accepts.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::SUPPORTED_HOSTS;

static TIME_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5]?[0-9]:[0-5]?[0-9]$").expect("valid time regex")
});

/// Returns true for a blank time (the field is optional) or an `H[H]:M[M]:S[S]`
/// value with hour 0-23 and minute/second 0-59.
pub fn is_valid_time(time: &str) -> bool {
    if time.trim().is_empty() {
        return true;
    }
    TIME_FORMAT.is_match(time)
}

/// Returns true if the URL mentions one of the supported post hosts.
pub fn is_supported_url(url: &str) -> bool {
    SUPPORTED_HOSTS.iter().any(|host| url.contains(host))
}

/// Single admission decision for a clip form.
pub fn is_form_valid(url: &str, start: &str, end: &str) -> bool {
    if url.trim().is_empty() || !is_supported_url(url) {
        return false;
    }
    is_valid_time(start) && is_valid_time(end)
}
