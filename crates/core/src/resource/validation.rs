//! Local input validation.
//!
//! Every check runs before any remote call and reports the offending field
//! together with the expected format.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use webflow_domain::constants::PREVIEW_ID_PREFIX;
use webflow_domain::utils::truncate_for_logging;
use webflow_domain::{is_empty_value, Args, FieldRule, FieldSpec, ProviderError, ResourceDescriptor, Result};

static OBJECT_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-f0-9]{24}$").expect("OBJECT_ID_REGEX should compile - this is a bug"));

static URL_PATH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/[a-zA-Z0-9\-_/.]*$").expect("URL_PATH_REGEX should compile - this is a bug")
});

static SLUG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("SLUG_REGEX should compile - this is a bug")
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("EMAIL_REGEX should compile - this is a bug")
});

static INTEGRITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^sha(256|384|512)-[A-Za-z0-9+/]+=*$")
        .expect("INTEGRITY_REGEX should compile - this is a bug")
});

static MD5_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-fA-F0-9]{32}$").expect("MD5_REGEX should compile - this is a bug"));

static VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(\.\d+)+([\-+][0-9A-Za-z.\-]+)?$")
        .expect("VERSION_REGEX should compile - this is a bug")
});

const MAX_ECHOED_VALUE_LEN: usize = 80;

/// Validate every declared field of `args`. Unknown keys are ignored.
pub fn validate_args(descriptor: &ResourceDescriptor, args: &Args) -> Result<()> {
    let mut failures: Vec<(&str, String)> = Vec::new();

    for field in descriptor.fields {
        if let Err(message) = validate_field(field, args.get(field.name)) {
            failures.push((field.name, message));
        }
    }

    match failures.len() {
        0 => Ok(()),
        1 => {
            let (field, message) = failures.remove(0);
            Err(ProviderError::validation(field, message))
        }
        _ => {
            let fields: Vec<&str> = failures.iter().map(|(field, _)| *field).collect();
            let message: Vec<String> = failures.into_iter().map(|(_, message)| message).collect();
            Err(ProviderError::validation(fields.join(", "), message.join("; ")))
        }
    }
}

/// Check one field. `Err` carries the user-facing message.
pub fn validate_field(field: &FieldSpec, value: Option<&Value>) -> std::result::Result<(), String> {
    let name = field.name;

    let value = match value {
        Some(value) if !is_empty_value(value) => value,
        _ if field.required => {
            return Err(format!(
                "{name} is required but was not provided. Expected {}",
                expectation(field)
            ));
        }
        _ => return Ok(()),
    };

    if !field.kind.matches(value) {
        return Err(format!(
            "{name} must be {}: got {}",
            field.kind.label(),
            echo(&value.to_string())
        ));
    }

    match field.rule {
        Some(rule) => check_rule(name, rule, value),
        None => Ok(()),
    }
}

fn check_rule(name: &str, rule: FieldRule, value: &Value) -> std::result::Result<(), String> {
    match (rule, value) {
        (FieldRule::ObjectId, Value::String(s)) => {
            if s.starts_with(PREVIEW_ID_PREFIX) || OBJECT_ID_REGEX.is_match(s) {
                Ok(())
            } else {
                Err(invalid(name, s, "a 24-character lowercase hexadecimal ID (e.g., '5f0c8c9e1c9d440000e8d8c3')"))
            }
        }
        (FieldRule::UrlPath, Value::String(s)) => {
            if !s.starts_with('/') {
                Err(format!("{name} must start with '/': got '{}'. Example: '/old-page'", echo(s)))
            } else if !URL_PATH_REGEX.is_match(s) {
                Err(format!(
                    "{name} contains invalid characters: got '{}'. Allowed characters: A-Z, a-z, 0-9, '-', '_', '/', '.'",
                    echo(s)
                ))
            } else {
                Ok(())
            }
        }
        (FieldRule::OneOf(allowed), Value::String(s)) => {
            if allowed.contains(&s.as_str()) {
                Ok(())
            } else {
                Err(invalid(name, s, &format!("one of: {}", allowed.join(", "))))
            }
        }
        (FieldRule::IntegerOneOf(allowed), value) => match value.as_i64() {
            Some(n) if allowed.contains(&n) => Ok(()),
            _ => {
                let allowed: Vec<String> = allowed.iter().map(ToString::to_string).collect();
                Err(format!("{name} must be one of {}: got {value}", allowed.join(", ")))
            }
        },
        (FieldRule::MaxLength(max), Value::String(s)) => {
            if s.chars().count() <= max {
                Ok(())
            } else {
                Err(format!("{name} is too long: {} characters, at most {max} allowed", s.chars().count()))
            }
        }
        (FieldRule::Slug, Value::String(s)) => matches_or(name, s, &SLUG_REGEX, "lowercase letters, numbers, and single hyphens (e.g., 'my-site')"),
        (FieldRule::Email, Value::String(s)) => matches_or(name, s, &EMAIL_REGEX, "a valid email address (e.g., 'user@example.com')"),
        (FieldRule::Url { https_only }, Value::String(s)) => {
            let ok = s.starts_with("https://") || (!https_only && s.starts_with("http://"));
            if ok && s.len() > "https://".len() {
                Ok(())
            } else if https_only {
                Err(invalid(name, s, "an HTTPS URL (e.g., 'https://example.com/hook')"))
            } else {
                Err(invalid(name, s, "an HTTP or HTTPS URL (e.g., 'https://cdn.example.com/script.js')"))
            }
        }
        (FieldRule::Version, Value::String(s)) => matches_or(name, s, &VERSION_REGEX, "a dotted version (e.g., '1.0.0')"),
        (FieldRule::IntegrityHash, Value::String(s)) => {
            matches_or(name, s, &INTEGRITY_REGEX, "a subresource integrity hash (e.g., 'sha384-...')")
        }
        (FieldRule::Md5, Value::String(s)) => matches_or(name, s, &MD5_REGEX, "a 32-character hexadecimal MD5 hash"),
        (FieldRule::Alphanumeric(max), Value::String(s)) => {
            if !s.is_empty() && s.len() <= max && s.chars().all(|c| c.is_ascii_alphanumeric()) {
                Ok(())
            } else {
                Err(invalid(name, s, &format!("1 to {max} alphanumeric characters with no spaces")))
            }
        }
        (FieldRule::NoBlankItems, Value::Array(items)) => {
            for item in items.iter().filter_map(Value::as_str) {
                if item.is_empty() || item.chars().any(char::is_whitespace) {
                    return Err(format!(
                        "{name} entries must be non-empty slugs without spaces: got '{}'",
                        echo(item)
                    ));
                }
            }
            Ok(())
        }
        (FieldRule::ScriptEntries, Value::Array(items)) => {
            for (idx, item) in items.iter().enumerate() {
                check_script_entry(name, idx, item)?;
            }
            Ok(())
        }
        (FieldRule::TextNodes, Value::Array(items)) => {
            for (idx, item) in items.iter().enumerate() {
                check_text_node(name, idx, item)?;
            }
            Ok(())
        }
        // Kind mismatch was already reported.
        _ => Ok(()),
    }
}

fn check_script_entry(name: &str, idx: usize, item: &Value) -> std::result::Result<(), String> {
    let text = |key: &str| item.get(key).and_then(Value::as_str).unwrap_or_default();

    if text("id").is_empty() {
        return Err(format!("{name}[{idx}].id is required: use the ID of a registered script"));
    }
    if !VERSION_REGEX.is_match(text("version")) {
        return Err(format!(
            "{name}[{idx}].version must be a dotted version (e.g., '1.0.0'): got '{}'",
            echo(text("version"))
        ));
    }
    if !matches!(text("location"), "header" | "footer") {
        return Err(format!(
            "{name}[{idx}].location must be either 'header' or 'footer': got '{}'",
            echo(text("location"))
        ));
    }
    Ok(())
}

fn check_text_node(name: &str, idx: usize, item: &Value) -> std::result::Result<(), String> {
    let text = |key: &str| item.get(key).and_then(Value::as_str).unwrap_or_default();

    if text("nodeId").is_empty() {
        return Err(format!(
            "{name}[{idx}].nodeId is required: node IDs come from GET /v2/pages/{{pageId}}/dom"
        ));
    }
    if text("text").is_empty() {
        return Err(format!(
            "{name}[{idx}].text is required: provide the new text for node '{}'",
            echo(text("nodeId"))
        ));
    }
    Ok(())
}

fn matches_or(name: &str, value: &str, regex: &Regex, expected: &str) -> std::result::Result<(), String> {
    if regex.is_match(value) {
        Ok(())
    } else {
        Err(invalid(name, value, expected))
    }
}

fn invalid(name: &str, value: &str, expected: &str) -> String {
    format!("{name} has invalid format: got '{}'. Expected {expected}", echo(value))
}

fn echo(value: &str) -> String {
    truncate_for_logging(value, MAX_ECHOED_VALUE_LEN).into_owned()
}

fn expectation(field: &FieldSpec) -> String {
    match field.rule {
        Some(FieldRule::ObjectId) => "a 24-character lowercase hexadecimal ID".into(),
        Some(FieldRule::UrlPath) => "a URL path starting with '/' (e.g., '/old-page')".into(),
        Some(FieldRule::OneOf(allowed)) => format!("one of: {}", allowed.join(", ")),
        Some(FieldRule::Email) => "a valid email address".into(),
        Some(FieldRule::Slug) => "a lowercase slug (e.g., 'my-site')".into(),
        _ => field.kind.label().into(),
    }
}
