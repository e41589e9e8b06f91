//! End-to-end lifecycle of a redirect against a mock API.

mod support;

use serde_json::json;
use support::{body_of, provider_for, requests, SITE_ID, TOKEN};
use tokio_util::sync::CancellationToken;
use webflow_domain::{Args, ErrorKind, ProviderError, ReadOutcome};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REDIRECT: &str = "webflow:index:Redirect";

fn redirect_args() -> Args {
    Args::new()
        .with("siteId", SITE_ID)
        .with("sourcePath", "/old-page")
        .with("destinationPath", "/new-page")
        .with("statusCode", 301)
}

fn redirects_path() -> String {
    format!("/v2/sites/{SITE_ID}/redirects")
}

#[tokio::test]
async fn test_create_posts_wire_names_and_returns_composite_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(redirects_path()))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .and(header("Accept-Version", "2.0.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "r1",
            "fromUrl": "/old-page",
            "toUrl": "/new-page",
            "statusCode": 301
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let outcome = provider
        .create(REDIRECT, &redirect_args(), false, &CancellationToken::new())
        .await
        .expect("create succeeds");

    assert_eq!(outcome.id, format!("{SITE_ID}/redirects/r1"));
    assert_eq!(outcome.state.inputs.get_str("sourcePath"), Some("/old-page"));
    assert_eq!(outcome.state.inputs.get("statusCode"), Some(&json!(301)));

    let recorded = requests(&server).await;
    assert_eq!(body_of(&recorded[0]), json!({"fromUrl": "/old-page", "toUrl": "/new-page", "statusCode": 301}));
}

#[tokio::test]
async fn test_create_rejects_invalid_input_without_calling_api() {
    let server = MockServer::start().await;
    let provider = provider_for(&server);

    let args = redirect_args().with("statusCode", 307);
    let err = provider.create(REDIRECT, &args, false, &CancellationToken::new()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(matches!(&err, ProviderError::Validation { field, .. } if field == "statusCode"));
    assert!(requests(&server).await.is_empty());
}

#[tokio::test]
async fn test_create_retries_rate_limit_then_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "r2"})))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let outcome = provider
        .create(REDIRECT, &redirect_args(), false, &CancellationToken::new())
        .await
        .expect("create succeeds after retry");

    assert_eq!(outcome.id, format!("{SITE_ID}/redirects/r2"));
    assert_eq!(requests(&server).await.len(), 2);
}

#[tokio::test]
async fn test_create_conflict_surfaces_remote_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "redirect already exists"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .create(REDIRECT, &redirect_args(), false, &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(err.message(), "create Redirect: redirect already exists");
}

#[tokio::test]
async fn test_read_finds_entry_in_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(redirects_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "redirects": [
                {"id": "other", "fromUrl": "/a", "toUrl": "/b", "statusCode": 302},
                {"id": "r1", "fromUrl": "/old-page", "toUrl": "/moved"}
            ]
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let id = format!("{SITE_ID}/redirects/r1");
    let outcome = provider
        .read(REDIRECT, &id, &redirect_args(), &CancellationToken::new())
        .await
        .unwrap();

    let state = outcome.into_state().expect("redirect still exists");
    assert_eq!(state.inputs.get_str("siteId"), Some(SITE_ID));
    assert_eq!(state.inputs.get_str("destinationPath"), Some("/moved"));
    // The list endpoint omits statusCode; the diff must not report it.
    assert!(state.inputs.get("statusCode").is_none());

    let diff = provider.diff(REDIRECT, &state, &redirect_args()).unwrap();
    assert!(diff.has_changes);
    assert!(diff.forces_replacement);
    assert_eq!(diff.changed_fields, ["destinationPath"]);
}

#[tokio::test]
async fn test_read_reports_gone_when_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(redirects_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"redirects": []})))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let outcome = provider
        .read(REDIRECT, &format!("{SITE_ID}/redirects/r1"), &Args::new(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome, ReadOutcome::Gone);
}

#[tokio::test]
async fn test_read_rejects_malformed_id() {
    let server = MockServer::start().await;
    let provider = provider_for(&server);

    let err = provider
        .read(REDIRECT, "not-a-composite-id", &Args::new(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::InvalidId(_)));
    assert!(requests(&server).await.is_empty());
}

#[tokio::test]
async fn test_update_is_refused_for_replace_only_type() {
    let server = MockServer::start().await;
    let provider = provider_for(&server);
    let state = webflow_domain::ResourceState::new(redirect_args(), serde_json::Map::new());

    let err = provider
        .update(
            REDIRECT,
            &format!("{SITE_ID}/redirects/r1"),
            &redirect_args(),
            &state,
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Fatal);
    assert!(err.message().contains("require replacement"));
    assert!(requests(&server).await.is_empty());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/r1", redirects_path())))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let id = format!("{SITE_ID}/redirects/r1");
    let cancel = CancellationToken::new();

    provider.delete(REDIRECT, &id, &cancel).await.expect("first delete");
    provider.delete(REDIRECT, &id, &cancel).await.expect("second delete");
}
