//! Provider functions: stateless calls that report on the configured token.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::instrument;
use webflow_core::{ApiRequest, ApiTransport};
use webflow_domain::{ProviderError, Result};

pub const TOKEN_INTROSPECT_PATH: &str = "/v2/token/introspect";
pub const AUTHORIZED_BY_PATH: &str = "/v2/token/authorized_by";

/// Sites, workspaces and users the token may act on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizedTo {
    pub site_ids: Vec<String>,
    pub workspace_ids: Vec<String>,
    pub user_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorization {
    pub id: String,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub last_used: Option<String>,
    #[serde(default)]
    pub grant_type: Option<String>,
    #[serde(default)]
    pub rate_limit: Option<u32>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub authorized_to: AuthorizedTo,
}

/// Application the token was issued to, when it came from an OAuth app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub authorization: Authorization,
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Describe the configured token: its scopes and what it is authorized for.
#[instrument(skip_all)]
pub async fn get_token_info(transport: &dyn ApiTransport, cancel: &CancellationToken) -> Result<TokenInfo> {
    call(transport, TOKEN_INTROSPECT_PATH, cancel)
        .await
        .map_err(|err| err.with_context("getTokenInfo", "token"))
}

/// The user who authorized the configured token.
#[instrument(skip_all)]
pub async fn get_authorized_user(
    transport: &dyn ApiTransport,
    cancel: &CancellationToken,
) -> Result<AuthorizedUser> {
    call(transport, AUTHORIZED_BY_PATH, cancel)
        .await
        .map_err(|err| err.with_context("getAuthorizedUser", "token"))
}

async fn call<T: DeserializeOwned>(
    transport: &dyn ApiTransport,
    path: &str,
    cancel: &CancellationToken,
) -> Result<T> {
    let value = transport.execute(ApiRequest::get(path), cancel).await?;
    serde_json::from_value(value)
        .map_err(|err| ProviderError::Decode(format!("unexpected response from {path}: {err}")))
}
