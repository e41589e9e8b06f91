//! Shared helpers for provider integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use webflow_domain::ApiToken;
use webflow_infra::HttpClient;
use webflow_provider::Provider;
use wiremock::MockServer;

pub const TOKEN: &str = "wf-integration-token-0123456789";
pub const SITE_ID: &str = "5f0c8c9e1c9d440000e8d8c3";

/// Provider wired to a mock server with short backoff delays.
pub fn provider_for(server: &MockServer) -> Provider {
    let client = HttpClient::builder(ApiToken::new(TOKEN))
        .base_url(server.uri())
        .allow_plain_http(true)
        .base_delay(Duration::from_millis(10))
        .max_delay(Duration::from_millis(50))
        .max_retries(3)
        .build()
        .expect("http client");
    Provider::with_transport(Arc::new(client))
}

pub async fn requests(server: &MockServer) -> Vec<wiremock::Request> {
    server.received_requests().await.expect("request recording enabled")
}

pub fn body_of(request: &wiremock::Request) -> Value {
    serde_json::from_slice(&request.body).expect("JSON request body")
}
