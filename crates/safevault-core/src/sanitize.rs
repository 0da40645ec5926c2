//! Input sanitization for untrusted free-text fields.
//!
//! The sanitizer removes a fixed blacklist of SQL-injection and
//! script-injection constructs. It is a second line of defense: every
//! statement that touches the credential store binds its parameters, so
//! nothing here is relied upon to keep SQL text well-formed.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Any HTML-tag-shaped substring.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<.*?>").expect("tag pattern is valid"));

/// Quote, angle-bracket, backslash, and semicolon characters.
static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[;'"<>\\]"#).expect("char pattern is valid"));

/// SQL comment marker.
static SQL_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--").expect("comment pattern is valid"));

static DROP_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)drop table").expect("drop pattern is valid"));

static SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)script").expect("script pattern is valid"));

/// Event-handler and XSS trigger words.
static XSS_TRIGGERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)onerror|onload|alert|img|javascript:").expect("trigger pattern is valid")
});

/// Markers that reject a value outright on write paths.
static XSS_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<.*?>|script|onerror|onload|alert|img").expect("marker pattern is valid")
});

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Outcome of checking a raw value against its sanitized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizationResult {
    /// `true` when sanitizing left the value unchanged.
    pub accepted: bool,
    /// The sanitized value.
    pub cleaned_value: String,
}

/// Removes every blacklisted construct from `input` and trims the result.
///
/// Removing one construct can splice a new one together
/// (`scrscriptipt` becomes `script`), so the blacklist is applied until
/// the value stops changing. Each changing pass strictly shortens the
/// value, which bounds the loop and makes the function idempotent.
pub fn sanitize(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let next = sanitize_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn sanitize_pass(input: &str) -> String {
    let value = TAG.replace_all(input, "");
    let value = UNSAFE_CHARS.replace_all(&value, "");
    let value = SQL_COMMENT.replace_all(&value, "");
    let value = DROP_TABLE.replace_all(&value, "");
    let value = SCRIPT.replace_all(&value, "");
    let value = XSS_TRIGGERS.replace_all(&value, "");
    value.trim().to_string()
}

/// Sanitizes `input` and reports whether it survived unchanged.
pub fn check(input: &str) -> SanitizationResult {
    let cleaned_value = sanitize(input);
    SanitizationResult {
        accepted: cleaned_value == input,
        cleaned_value,
    }
}

/// Returns `true` if `input` contains tag syntax or a script trigger word.
pub fn contains_xss_marker(input: &str) -> bool {
    XSS_MARKER.is_match(input)
}

/// Syntactic email check. Empty input is invalid.
pub fn is_valid_email(input: &str) -> bool {
    !input.is_empty() && EMAIL.is_match(input)
}
