//! Credential scrubbing utilities for preventing sensitive data exposure.
//!
//! Error messages from the platform API and the cluster CLI are printed to the
//! operator and end up pasted into support tickets, so tokens are replaced
//! with placeholders before anything is shown.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex patterns for detecting various types of credentials
    static ref CREDENTIAL_PATTERNS: Vec<(Regex, &'static str)> = vec![
        // Platform API key variable
        (Regex::new(r"(?i)(cf[_-]?api[_-]?key)\s*[:=]\s*([^\s]+)").unwrap(),
         "$1=<REDACTED_API_KEY>"),

        // Generic API keys
        (Regex::new(r"(?i)(api[_-]?key|apikey)\s*[:=]\s*([A-Za-z0-9\-_.]{20,})").unwrap(),
         "$1=<REDACTED_API_KEY>"),

        // Bearer tokens and authorization headers
        (Regex::new(r"(?i)(bearer|authorization)\s*[:=]\s*(bearer\s+)?([A-Za-z0-9\-._~+/]+=*)").unwrap(),
         "$1=<REDACTED_TOKEN>"),

        // Generic tokens
        (Regex::new(r"(?i)(token|access[_-]?token|auth[_-]?token)\s*[:=]\s*([A-Za-z0-9\-._~+/]{20,})").unwrap(),
         "$1=<REDACTED_TOKEN>"),

        // Generic passwords
        (Regex::new(r"(?i)(password|passwd|pwd)\s*[:=]\s*([^\s]+)").unwrap(),
         "$1=<REDACTED_PASSWORD>"),

        // Basic auth in URLs
        (Regex::new(r"(https?://)([^:/@\s]+):([^@\s]+)@").unwrap(),
         "$1<REDACTED_USER>:<REDACTED_PASS>@"),
    ];
}

/// Scrub credentials from a string.
///
/// # Example
///
/// ```
/// use cf_support::security::credential_scrubber::scrub_credentials;
///
/// let input = "request failed with Authorization: abc123.def456";
/// assert_eq!(scrub_credentials(input), "request failed with Authorization=<REDACTED_TOKEN>");
/// ```
pub fn scrub_credentials(input: &str) -> String {
    let mut result = input.to_string();

    for (pattern, replacement) in CREDENTIAL_PATTERNS.iter() {
        result = pattern.replace_all(&result, *replacement).to_string();
    }

    result
}

/// Replace every occurrence of a known secret value.
pub fn redact_secret(input: &str, secret: &str) -> String {
    if secret.is_empty() {
        return input.to_string();
    }
    input.replace(secret, "<REDACTED_TOKEN>")
}

/// Create a safe error message that scrubs credentials.
pub fn safe_error_message(context: &str, error: &impl std::fmt::Display) -> String {
    let raw_message = format!("{}: {}", context, error);
    scrub_credentials(&raw_message)
}
