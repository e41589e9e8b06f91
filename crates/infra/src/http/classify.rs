//! Classification of non-2xx responses into provider errors.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;
use webflow_domain::constants::{ENV_API_TOKEN, MAX_LOGGED_BODY_LEN};
use webflow_domain::utils::{redact_credential, truncate_for_logging};
use webflow_domain::{ErrorKind, ProviderError};

/// Map a non-2xx status and its body to a provider error.
///
/// Every message is run through credential redaction; authentication
/// failures never echo the response body. Bodies are kept whole in the
/// error and only truncated in log fields.
pub fn classify_status(status: StatusCode, body: &str, credential: &str) -> ProviderError {
    let code = status.as_u16();
    let body = redact_credential(body, credential);
    debug!(
        status = code,
        body = %truncate_for_logging(&body, MAX_LOGGED_BODY_LEN),
        "classifying error response"
    );

    match ErrorKind::from_status(code) {
        ErrorKind::NotFound => ProviderError::NotFound(
            remote_message(&body).unwrap_or_else(|| "the remote object does not exist".into()),
        ),
        ErrorKind::Conflict => ProviderError::Conflict(
            remote_message(&body).unwrap_or_else(|| describe_body(code, &body)),
        ),
        ErrorKind::RateLimited => ProviderError::RateLimited(describe_body(code, &body)),
        ErrorKind::Unauthorized if status == StatusCode::FORBIDDEN => ProviderError::Unauthorized(
            "access denied (HTTP 403): the API token lacks the scopes required for this \
             resource. Grant the token access to the site or workspace and retry"
                .into(),
        ),
        ErrorKind::Unauthorized => ProviderError::Unauthorized(format!(
            "authentication failed (HTTP 401): the API token is invalid or has expired. \
             Provide a valid token via the provider configuration or {ENV_API_TOKEN}"
        )),
        _ => ProviderError::Fatal(describe_body(code, &body)),
    }
}

/// The `message` field of a JSON error body, if any.
pub fn remote_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = value.get("message").and_then(Value::as_str)?.trim();
    if message.is_empty() {
        return None;
    }
    Some(message.to_string())
}

fn describe_body(code: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {code}: <empty body>")
    } else {
        format!("HTTP {code}: {body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "wf_0123456789abcdef0123456789abcdef";

    #[test]
    fn conflict_surfaces_remote_message_verbatim() {
        let err = classify_status(
            StatusCode::CONFLICT,
            r#"{"message":"duplicate slug","code":"conflict"}"#,
            TOKEN,
        );
        assert_eq!(err, ProviderError::Conflict("duplicate slug".into()));
    }

    #[test]
    fn not_found_and_rate_limit_kinds() {
        assert_eq!(classify_status(StatusCode::NOT_FOUND, "", TOKEN).kind(), ErrorKind::NotFound);
        assert_eq!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, "slow down", TOKEN).kind(),
            ErrorKind::RateLimited
        );
    }

    #[test]
    fn unauthorized_never_echoes_body_or_token() {
        let body = format!(r#"{{"message":"invalid token {TOKEN}"}}"#);
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let err = classify_status(status, &body, TOKEN);
            assert_eq!(err.kind(), ErrorKind::Unauthorized);
            assert!(!err.to_string().contains(TOKEN));
            assert!(!err.to_string().contains("invalid token"));
        }
    }

    #[test]
    fn server_errors_are_fatal_and_redacted() {
        let body = format!("upstream failure for Bearer {TOKEN}");
        let err = classify_status(StatusCode::INTERNAL_SERVER_ERROR, &body, TOKEN);
        assert_eq!(err.kind(), ErrorKind::Fatal);
        assert!(err.message().starts_with("HTTP 500: "));
        assert!(!err.message().contains(TOKEN));
        assert!(err.message().contains("[REDACTED]"));
    }

    #[test]
    fn fatal_bodies_are_kept_whole() {
        let body = format!("{{\"error\":\"{}\",\"auth\":\"Bearer {TOKEN}\"}}", "x".repeat(700));
        let err = classify_status(StatusCode::BAD_GATEWAY, &body, TOKEN);

        let expected = format!("HTTP 502: {}", body.replace(TOKEN, "[REDACTED]"));
        assert_eq!(err.message(), expected);
        assert!(err.message().len() > MAX_LOGGED_BODY_LEN);
        assert!(!err.message().contains("truncated"));
    }

    #[test]
    fn other_client_errors_are_fatal() {
        let err = classify_status(StatusCode::BAD_REQUEST, "", TOKEN);
        assert_eq!(err, ProviderError::Fatal("HTTP 400: <empty body>".into()));
    }

    #[test]
    fn extracts_remote_message() {
        assert_eq!(remote_message(r#"{"message":"  nope "}"#), Some("nope".into()));
        assert_eq!(remote_message(r#"{"message":""}"#), None);
        assert_eq!(remote_message("plain text"), None);
    }
}
