//! Generic resource adapter driven by a [`ResourceDescriptor`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};
use uuid::Uuid;
use webflow_domain::constants::{ID_SEPARATOR, PREVIEW_ID_PREFIX};
use webflow_domain::{
    Args, CreateOutcome, DiffResult, ProviderError, ReadMode, ReadOutcome, ResourceDescriptor,
    ResourceId, ResourceState, Result,
};

use super::diff::diff;
use super::payload::{
    build_create_body, build_update_body, extract_native_id, find_in_list, preview_state,
    render_create_path, render_for_id, scopes_from_args, state_from_response, ArgsFallback,
};
use super::ports::{ApiRequest, ApiTransport, ResourceLifecycle};
use super::validation::validate_args;

/// Implements the lifecycle contract for any resource type by interpreting
/// its descriptor.
pub struct ResourceAdapter {
    descriptor: &'static ResourceDescriptor,
    transport: Arc<dyn ApiTransport>,
}

impl ResourceAdapter {
    pub fn new(descriptor: &'static ResourceDescriptor, transport: Arc<dyn ApiTransport>) -> Self {
        Self { descriptor, transport }
    }

    fn context(&self, operation: &'static str) -> impl Fn(ProviderError) -> ProviderError + '_ {
        move |err| err.with_context(operation, self.descriptor.name)
    }

    fn decode_id(&self, id: &str) -> Result<ResourceId> {
        ResourceId::decode(id, &self.descriptor.id_shape)
    }

    fn build_id(&self, scopes: Vec<String>, native_id: Option<String>) -> Result<ResourceId> {
        let tag = self.descriptor.id_shape.type_tag;
        match native_id {
            Some(native) => ResourceId::new(scopes, tag, native),
            None => ResourceId::singleton(scopes, tag),
        }
    }

    /// Projected outcome of a create, without any remote call.
    ///
    /// Scope values that are not known yet (e.g. the parent is itself being
    /// previewed) are replaced with placeholders so the ID stays decodable.
    fn preview(&self, args: &Args) -> Result<CreateOutcome> {
        let scopes = self
            .descriptor
            .scope_fields
            .iter()
            .map(|name| match args.get_str(name) {
                Some(value) if !value.is_empty() && !value.contains(ID_SEPARATOR) => {
                    value.to_string()
                }
                _ => format!("{PREVIEW_ID_PREFIX}{name}"),
            })
            .collect();

        let native_id = (!self.descriptor.id_shape.singleton)
            .then(|| format!("{PREVIEW_ID_PREFIX}{}", Uuid::new_v4()));
        let id = self.build_id(scopes, native_id)?;

        debug!(id = %id, "projected resource for preview");
        Ok(CreateOutcome { id: id.encode(), state: preview_state(args) })
    }

    /// Fetch the remote document for `id`, or `None` if it no longer exists.
    async fn fetch(&self, id: &ResourceId, cancel: &CancellationToken) -> Result<Option<Value>> {
        let endpoint = self.descriptor.endpoints.read;
        let path = render_for_id(endpoint.path, self.descriptor, id)?;

        let response = match self.transport.execute(ApiRequest::new(endpoint.method, path), cancel).await {
            Ok(response) => response,
            Err(err) if err.is_not_found() => return Ok(None),
            Err(err) => return Err(err),
        };

        match self.descriptor.endpoints.read_mode {
            ReadMode::Get if response.is_null() => Ok(None),
            ReadMode::Get => Ok(Some(response)),
            ReadMode::FindInList { list_key } => Ok(id
                .native_id()
                .and_then(|native| find_in_list(self.descriptor, &response, list_key, native))
                .cloned()),
        }
    }
}

#[async_trait]
impl ResourceLifecycle for ResourceAdapter {
    fn descriptor(&self) -> &'static ResourceDescriptor {
        self.descriptor
    }

    fn validate(&self, args: &Args) -> Result<()> {
        validate_args(self.descriptor, args).map_err(self.context("validate"))
    }

    fn diff(&self, state: &ResourceState, args: &Args) -> DiffResult {
        diff(self.descriptor, state, args)
    }

    #[instrument(skip_all, fields(resource = self.descriptor.name, dry_run = dry_run))]
    async fn create(
        &self,
        args: &Args,
        dry_run: bool,
        cancel: &CancellationToken,
    ) -> Result<CreateOutcome> {
        if dry_run {
            return self.preview(args).map_err(self.context("preview"));
        }

        let ctx = self.context("create");
        validate_args(self.descriptor, args).map_err(&ctx)?;

        let scopes = scopes_from_args(self.descriptor, args).map_err(&ctx)?;
        let endpoint = self.descriptor.endpoints.create;
        let path = render_create_path(endpoint.path, self.descriptor, &scopes, args).map_err(&ctx)?;

        let mut request = ApiRequest::new(endpoint.method, path);
        if endpoint.method.carries_body() {
            request = request.with_body(build_create_body(self.descriptor, args));
        }
        let response = self.transport.execute(request, cancel).await.map_err(&ctx)?;

        let native_id = if self.descriptor.id_shape.singleton {
            None
        } else {
            let native = extract_native_id(self.descriptor, &response).ok_or_else(|| {
                ProviderError::Decode(format!(
                    "create response did not include '{}'",
                    self.descriptor.native_id_key
                ))
            });
            Some(native.map_err(&ctx)?)
        };
        let id = self.build_id(scopes, native_id).map_err(&ctx)?;

        let state = state_from_response(self.descriptor, &id, &response, args, ArgsFallback::All);
        info!(id = %id, "resource created");
        Ok(CreateOutcome { id: id.encode(), state })
    }

    #[instrument(skip_all, fields(resource = self.descriptor.name, id = %id))]
    async fn read(&self, id: &str, args: &Args, cancel: &CancellationToken) -> Result<ReadOutcome> {
        let ctx = self.context("read");
        let resource_id = self.decode_id(id).map_err(&ctx)?;

        if resource_id.is_preview() {
            debug!("preview ID has no remote object");
            return Ok(ReadOutcome::Gone);
        }

        match self.fetch(&resource_id, cancel).await.map_err(&ctx)? {
            Some(document) => Ok(ReadOutcome::Found(state_from_response(
                self.descriptor,
                &resource_id,
                &document,
                args,
                ArgsFallback::WriteOnly,
            ))),
            None => {
                info!("resource no longer exists remotely");
                Ok(ReadOutcome::Gone)
            }
        }
    }

    #[instrument(skip_all, fields(resource = self.descriptor.name, id = %id))]
    async fn update(
        &self,
        id: &str,
        args: &Args,
        state: &ResourceState,
        cancel: &CancellationToken,
    ) -> Result<ResourceState> {
        let ctx = self.context("update");
        let resource_id = self.decode_id(id).map_err(&ctx)?;

        let Some(endpoint) = self.descriptor.endpoints.update else {
            return Err(ctx(ProviderError::Fatal(
                "in-place updates are not supported; changed inputs require replacement".into(),
            )));
        };

        validate_args(self.descriptor, args).map_err(&ctx)?;

        let changes = diff(self.descriptor, state, args);
        let body = build_update_body(self.descriptor, args, &changes.changed_fields);
        let path = render_for_id(endpoint.path, self.descriptor, &resource_id).map_err(&ctx)?;

        let response = self
            .transport
            .execute(ApiRequest::new(endpoint.method, path).with_body(body), cancel)
            .await
            .map_err(&ctx)?;

        let mut updated = if response.is_object() {
            state_from_response(self.descriptor, &resource_id, &response, args, ArgsFallback::All)
        } else {
            let mut inputs = args.clone();
            for (name, scope) in self.descriptor.scope_fields.iter().zip(resource_id.scopes()) {
                inputs.insert(*name, Value::String(scope.clone()));
            }
            ResourceState::new(inputs, state.outputs.clone())
        };
        for (name, value) in &state.outputs {
            updated.outputs.entry(name.clone()).or_insert_with(|| value.clone());
        }

        info!(changed = ?changes.changed_fields, "resource updated");
        Ok(updated)
    }

    #[instrument(skip_all, fields(resource = self.descriptor.name, id = %id))]
    async fn delete(&self, id: &str, cancel: &CancellationToken) -> Result<()> {
        let ctx = self.context("delete");
        let resource_id = self.decode_id(id).map_err(&ctx)?;

        let Some(endpoint) = self.descriptor.endpoints.delete else {
            info!("remote API cannot delete this resource; removing it from state only");
            return Ok(());
        };
        if resource_id.is_preview() {
            return Ok(());
        }

        let path = render_for_id(endpoint.path, self.descriptor, &resource_id).map_err(&ctx)?;
        match self.transport.execute(ApiRequest::new(endpoint.method, path), cancel).await {
            Ok(_) => {
                info!("resource deleted");
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                debug!("resource already gone");
                Ok(())
            }
            Err(err) => Err(ctx(err)),
        }
    }
}
