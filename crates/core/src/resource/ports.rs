//! Port interfaces for resource management
//!
//! These traits define the boundaries between the generic resource logic
//! and the HTTP implementation in the infra crate.

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use webflow_domain::{
    Args, CreateOutcome, DiffResult, HttpMethod, ReadOutcome, ResourceDescriptor, ResourceState,
    Result,
};

use super::phase::ResourcePhase;

/// A single call against the remote API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path relative to the API base URL, e.g. `/v2/sites/{id}`.
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Trait for executing authenticated calls against the remote API
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Execute the request, retrying rate limits and transient failures.
    ///
    /// Returns the parsed JSON body, or `Value::Null` for empty responses.
    /// Non-2xx responses come back as classified errors.
    async fn execute(&self, request: ApiRequest, cancel: &CancellationToken) -> Result<Value>;
}

/// Lifecycle contract every resource type implements
#[async_trait]
pub trait ResourceLifecycle: Send + Sync {
    /// Static description of the resource type
    fn descriptor(&self) -> &'static ResourceDescriptor;

    /// Check inputs locally without any remote call
    fn validate(&self, args: &Args) -> Result<()>;

    /// Compare stored state against desired inputs
    fn diff(&self, state: &ResourceState, args: &Args) -> DiffResult;

    /// Phase the engine should enter, given stored state (if any)
    fn plan(&self, state: Option<&ResourceState>, args: &Args) -> ResourcePhase {
        match state {
            Some(state) => ResourcePhase::plan(true, &self.diff(state, args)),
            None => ResourcePhase::plan(false, &DiffResult::no_changes()),
        }
    }

    /// Create the remote object, or project it without remote calls when
    /// `dry_run` is set
    async fn create(
        &self,
        args: &Args,
        dry_run: bool,
        cancel: &CancellationToken,
    ) -> Result<CreateOutcome>;

    /// Fetch current remote state; `Gone` when the object no longer exists
    async fn read(&self, id: &str, args: &Args, cancel: &CancellationToken) -> Result<ReadOutcome>;

    /// Apply in-place changes
    async fn update(
        &self,
        id: &str,
        args: &Args,
        state: &ResourceState,
        cancel: &CancellationToken,
    ) -> Result<ResourceState>;

    /// Remove the remote object; succeeds if it is already gone
    async fn delete(&self, id: &str, cancel: &CancellationToken) -> Result<()>;
}
