//! Provider registry - maps type tokens to resource lifecycles

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{json, Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::info;
use webflow_core::{ApiTransport, ResourceAdapter, ResourceLifecycle, ResourcePhase};
use webflow_domain::constants::{PROVIDER_NAME, TYPE_TOKEN_PREFIX};
use webflow_domain::{
    Args, CreateOutcome, DiffResult, ProviderConfig, ProviderError, ReadOutcome, ResourceState, Result,
};
use webflow_infra::{catalogue, HttpClient};

use crate::functions::{self, AuthorizedUser, TokenInfo};
use crate::utils::operation_helpers::execute_timed;

/// Type alias for resource lifecycle trait objects
type DynResourceLifecycle = dyn ResourceLifecycle + 'static;

/// The resource provider: one lifecycle per catalogue entry, all sharing a
/// single transport.
pub struct Provider {
    transport: Arc<dyn ApiTransport>,
    resources: BTreeMap<String, Arc<DynResourceLifecycle>>,
}

impl Provider {
    /// Build a provider talking to the remote API with `config`.
    ///
    /// # Errors
    /// Returns `ProviderError::Config` if the configuration is invalid.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;
        let client = HttpClient::from_config(config)?;
        info!(base_url = client.base_url(), "provider configured");
        Ok(Self::with_transport(Arc::new(client)))
    }

    /// Build a provider on top of an arbitrary transport.
    pub fn with_transport(transport: Arc<dyn ApiTransport>) -> Self {
        let resources = catalogue()
            .iter()
            .copied()
            .map(|descriptor| {
                let adapter: Arc<DynResourceLifecycle> =
                    Arc::new(ResourceAdapter::new(descriptor, Arc::clone(&transport)));
                (descriptor.token(), adapter)
            })
            .collect();
        Self { transport, resources }
    }

    /// Type tokens of every managed resource, sorted.
    pub fn resource_types(&self) -> Vec<&str> {
        self.resources.keys().map(String::as_str).collect()
    }

    /// Lifecycle for a type token.
    ///
    /// # Errors
    /// Returns `ProviderError::Config` for an unknown token.
    pub fn resource(&self, token: &str) -> Result<&DynResourceLifecycle> {
        self.resources.get(token).map(Arc::as_ref).ok_or_else(|| {
            ProviderError::Config(format!(
                "unknown resource type '{token}'. Expected a token such as '{TYPE_TOKEN_PREFIX}Redirect'"
            ))
        })
    }

    /// Published provider schema: every resource type and function.
    pub fn schema() -> Value {
        let resources: Map<String, Value> =
            catalogue().iter().map(|descriptor| (descriptor.token(), descriptor.schema())).collect();

        json!({
            "name": PROVIDER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "resources": resources,
            "functions": {
                format!("{PROVIDER_NAME}:index:getTokenInfo"): {
                    "description": "Describe the configured API token and what it is authorized for",
                    "path": functions::TOKEN_INTROSPECT_PATH,
                },
                format!("{PROVIDER_NAME}:index:getAuthorizedUser"): {
                    "description": "The user who authorized the configured API token",
                    "path": functions::AUTHORIZED_BY_PATH,
                },
            },
        })
    }

    pub fn validate(&self, token: &str, args: &Args) -> Result<()> {
        self.resource(token)?.validate(args)
    }

    pub fn diff(&self, token: &str, state: &ResourceState, args: &Args) -> Result<DiffResult> {
        Ok(self.resource(token)?.diff(state, args))
    }

    /// Phase the engine should enter for a resource.
    pub fn plan(&self, token: &str, state: Option<&ResourceState>, args: &Args) -> Result<ResourcePhase> {
        Ok(self.resource(token)?.plan(state, args))
    }

    pub async fn create(
        &self,
        token: &str,
        args: &Args,
        dry_run: bool,
        cancel: &CancellationToken,
    ) -> Result<CreateOutcome> {
        let resource = self.resource(token)?;
        execute_timed(token, "create", || resource.create(args, dry_run, cancel)).await
    }

    pub async fn read(
        &self,
        token: &str,
        id: &str,
        args: &Args,
        cancel: &CancellationToken,
    ) -> Result<ReadOutcome> {
        let resource = self.resource(token)?;
        execute_timed(token, "read", || resource.read(id, args, cancel)).await
    }

    pub async fn update(
        &self,
        token: &str,
        id: &str,
        args: &Args,
        state: &ResourceState,
        cancel: &CancellationToken,
    ) -> Result<ResourceState> {
        let resource = self.resource(token)?;
        execute_timed(token, "update", || resource.update(id, args, state, cancel)).await
    }

    pub async fn delete(&self, token: &str, id: &str, cancel: &CancellationToken) -> Result<()> {
        let resource = self.resource(token)?;
        execute_timed(token, "delete", || resource.delete(id, cancel)).await
    }

    pub async fn get_token_info(&self, cancel: &CancellationToken) -> Result<TokenInfo> {
        execute_timed("token", "getTokenInfo", || {
            functions::get_token_info(self.transport.as_ref(), cancel)
        })
        .await
    }

    pub async fn get_authorized_user(&self, cancel: &CancellationToken) -> Result<AuthorizedUser> {
        execute_timed("token", "getAuthorizedUser", || {
            functions::get_authorized_user(self.transport.as_ref(), cancel)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use webflow_core::ApiRequest;
    use webflow_domain::ErrorKind;

    use super::*;

    const SITE_ID: &str = "5f0c8c9e1c9d440000e8d8c3";

    /// Transport that records requests and never answers successfully.
    #[derive(Default)]
    struct RecordingTransport {
        requests: Mutex<Vec<ApiRequest>>,
    }

    #[async_trait]
    impl ApiTransport for RecordingTransport {
        async fn execute(&self, request: ApiRequest, _cancel: &CancellationToken) -> Result<Value> {
            self.requests.lock().unwrap().push(request);
            Err(ProviderError::NotFound("nothing here".into()))
        }
    }

    fn provider() -> (Provider, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::default());
        (Provider::with_transport(transport.clone()), transport)
    }

    #[test]
    fn registers_every_catalogue_type() {
        let (provider, _) = provider();
        let types = provider.resource_types();
        assert_eq!(types.len(), catalogue().len());
        assert!(types.contains(&"webflow:index:Redirect"));
        assert!(types.contains(&"webflow:index:SiteCustomCode"));
    }

    #[test]
    fn unknown_type_is_a_config_error() {
        let (provider, _) = provider();
        let err = provider.validate("webflow:index:Page", &Args::new()).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.message().contains("webflow:index:Page"));
    }

    #[test]
    fn schema_lists_resources_and_functions() {
        let schema = Provider::schema();
        assert_eq!(schema["name"], "webflow");
        assert_eq!(schema["resources"]["webflow:index:Redirect"]["idShape"]["typeTag"], "redirects");
        assert!(schema["functions"]["webflow:index:getTokenInfo"].is_object());
    }

    #[test]
    fn plans_creation_and_replacement() {
        let (provider, _) = provider();
        let token = "webflow:index:Redirect";
        let args = Args::new()
            .with("siteId", SITE_ID)
            .with("sourcePath", "/old")
            .with("destinationPath", "/new")
            .with("statusCode", 301);
        assert_eq!(provider.plan(token, None, &args).unwrap(), ResourcePhase::Creating);

        let state = ResourceState::new(args.clone(), Map::new());
        assert_eq!(provider.plan(token, Some(&state), &args).unwrap(), ResourcePhase::Present);

        let moved = args.clone().with("destinationPath", "/newer");
        assert_eq!(provider.plan(token, Some(&state), &moved).unwrap(), ResourcePhase::Replacing);
    }

    #[tokio::test]
    async fn dry_run_create_never_reaches_transport() {
        let (provider, transport) = provider();
        let args = Args::new().with("siteId", SITE_ID).with("content", "User-agent: *\nDisallow: /");

        let outcome = provider
            .create("webflow:index:RobotsTxt", &args, true, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.id, format!("{SITE_ID}/robots.txt"));
        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_treats_missing_objects_as_deleted() {
        let (provider, transport) = provider();
        provider
            .delete("webflow:index:Webhook", &format!("{SITE_ID}/webhooks/w1"), &CancellationToken::new())
            .await
            .unwrap();

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/v2/webhooks/w1");
    }

    #[tokio::test]
    async fn functions_wrap_errors_with_context() {
        let (provider, _) = provider();
        let err = provider.get_token_info(&CancellationToken::new()).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.message().starts_with("getTokenInfo token: "));
    }
}
