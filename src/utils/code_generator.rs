//! Short code generation and validation utilities.
//!
//! Generated and custom codes share one alphabet: `[A-Za-z0-9]`. Generated
//! codes are not collision-free on their own; uniqueness is enforced by
//! [`crate::application::services::LinkService`] together with the store's
//! unique constraint.

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Length of generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Path segments owned by the HTTP surface itself.
///
/// These are never looked up as redirect codes.
pub const RESERVED_CODES: &[&str] = &["api", "healthz"];

static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("static regex is valid"));

/// Generates a uniformly random 6-character alphanumeric code.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(validate_code(&code));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true iff `candidate` is 6 to 8 characters from `[A-Za-z0-9]`.
pub fn validate_code(candidate: &str) -> bool {
    CODE_REGEX.is_match(candidate)
}

/// Returns true iff `candidate` is an absolute URL with a scheme and a host.
///
/// A bare domain such as `example.com` has no scheme and is rejected, as are
/// host-less URLs like `mailto:` or `javascript:`. Control characters are
/// rejected outright since the URL ends up in a `Location` header.
pub fn validate_url(candidate: &str) -> bool {
    if candidate.chars().any(|c| c.is_ascii_control()) {
        return false;
    }

    match Url::parse(candidate) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

/// Returns true if `segment` names part of the API surface.
pub fn is_reserved(segment: &str) -> bool {
    RESERVED_CODES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(segment))
}
