//! Credential redaction for error messages and log lines.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::REDACTED;

static SECRET_PATTERNS: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    [
        (r"(?i)\b(bearer)\s+[A-Za-z0-9\-._~+/]+=*", format!("$1 {REDACTED}")),
        (
            r#"(?i)"((?:access_?|api_?|refresh_?)?token|authorization|secret|client_secret|password)"\s*:\s*"[^"]*""#,
            format!(r#""$1":"{REDACTED}""#),
        ),
        (r"(?i)\b((?:access_|api_)?token|secret|password)=[^&\s]+", format!("$1={REDACTED}")),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("secret pattern should compile - this is a bug"), replacement)
    })
    .collect()
});

/// Mask token-like values: bearer credentials, JSON secret fields, and
/// query-string secrets.
#[must_use]
pub fn redact_secrets(text: &str) -> Cow<'_, str> {
    let mut out = Cow::Borrowed(text);
    for (regex, replacement) in SECRET_PATTERNS.iter() {
        if regex.is_match(&out) {
            out = Cow::Owned(regex.replace_all(&out, replacement.as_str()).into_owned());
        }
    }
    out
}

/// Mask the exact credential wherever it appears, then any token-like value.
#[must_use]
pub fn redact_credential(text: &str, credential: &str) -> String {
    let text = if credential.trim().is_empty() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.replace(credential, REDACTED))
    };
    redact_secrets(&text).into_owned()
}

/// Cut `value` to at most `max_len` bytes on a character boundary.
#[must_use]
pub fn truncate_for_logging(value: &str, max_len: usize) -> Cow<'_, str> {
    if value.len() <= max_len {
        return Cow::Borrowed(value);
    }
    let mut end = max_len;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}... ({} bytes truncated)", &value[..end], value.len() - end))
}
