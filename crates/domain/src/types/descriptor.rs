//! Declarative resource descriptors.
//!
//! Each remote resource type is described by a static table: its input
//! fields, the fields it reports back, the endpoints for each lifecycle
//! operation, and the shape of its composite ID. The generic adapter in
//! the core crate interprets these tables.

use serde::Serialize;
use serde_json::Value;

use crate::constants::TYPE_TOKEN_PREFIX;
use crate::types::resource_id::IdShape;

/// JSON shape of an input or output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
    StringList,
    Object,
    ObjectList,
}

impl FieldKind {
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.as_i64().is_some(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::StringList => value.as_array().is_some_and(|items| items.iter().all(Value::is_string)),
            Self::ObjectList => value.as_array().is_some_and(|items| items.iter().all(Value::is_object)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Integer => "an integer",
            Self::Boolean => "a boolean",
            Self::StringList => "a list of strings",
            Self::Object => "an object",
            Self::ObjectList => "a list of objects",
        }
    }
}

/// Format rule checked before any remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "value", rename_all = "camelCase")]
pub enum FieldRule {
    /// 24 lowercase hex characters, or a dry-run preview ID.
    ObjectId,
    /// Starts with `/` and contains only URL-safe path characters.
    UrlPath,
    OneOf(&'static [&'static str]),
    IntegerOneOf(&'static [i64]),
    MaxLength(usize),
    /// Lowercase alphanumerics separated by single hyphens.
    Slug,
    Email,
    Url { https_only: bool },
    /// Dotted version such as `1.0.0`.
    Version,
    /// Subresource integrity hash such as `sha384-...`.
    IntegrityHash,
    Md5,
    /// Alphanumeric only, up to the given length.
    Alphanumeric(usize),
    /// List entries must be non-empty and contain no whitespace.
    NoBlankItems,
    /// Custom code entries: `id`, dotted `version`, `location` of header or footer.
    ScriptEntries,
    /// DOM node updates: non-empty `nodeId` and `text`.
    TextNodes,
}

/// What a changed field does to an existing resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangePolicy {
    Update,
    ForceReplace,
}

/// How a field's value is translated to and from the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Encoding {
    Plain,
    /// Text content on our side, `{rules, sitemap}` on the wire.
    RobotsTxt,
    /// Slugs on our side, `[{slug, ...}]` objects in responses.
    SlugList,
}

/// Input field of a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: &'static str,
    /// Dotted path in request bodies, e.g. `data.name`.
    pub request_key: &'static str,
    /// Dotted path in responses.
    pub response_key: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub rule: Option<FieldRule>,
    pub change: ChangePolicy,
    /// Sent on update only when it actually changed; the remote API rejects
    /// re-submitting an unchanged unique value.
    pub unique: bool,
    /// Not returned by reads; state keeps the last submitted value.
    pub write_only: bool,
    pub encoding: Encoding,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            request_key: name,
            response_key: name,
            kind,
            required: false,
            rule: None,
            change: ChangePolicy::Update,
            unique: false,
            write_only: false,
            encoding: Encoding::Plain,
            description: "",
        }
    }

    pub const fn required(self) -> Self {
        Self { required: true, ..self }
    }

    pub const fn replace(self) -> Self {
        Self { change: ChangePolicy::ForceReplace, ..self }
    }

    pub const fn unique(self) -> Self {
        Self { unique: true, ..self }
    }

    pub const fn write_only(self) -> Self {
        Self { write_only: true, ..self }
    }

    pub const fn rule(self, rule: FieldRule) -> Self {
        Self { rule: Some(rule), ..self }
    }

    pub const fn encoding(self, encoding: Encoding) -> Self {
        Self { encoding, ..self }
    }

    /// Same wire key for requests and responses.
    pub const fn key(self, key: &'static str) -> Self {
        Self { request_key: key, response_key: key, ..self }
    }

    pub const fn keys(self, request_key: &'static str, response_key: &'static str) -> Self {
        Self { request_key, response_key, ..self }
    }

    pub const fn describe(self, description: &'static str) -> Self {
        Self { description, ..self }
    }

    pub fn forces_replacement(&self) -> bool {
        self.change == ChangePolicy::ForceReplace
    }
}

/// Read-only attribute reported by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    pub name: &'static str,
    pub response_key: &'static str,
    pub description: &'static str,
}

impl OutputSpec {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, response_key: name, description }
    }

    pub const fn key(self, response_key: &'static str) -> Self {
        Self { response_key, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    pub fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path template with `{scopeField}` and `{id}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
}

impl Endpoint {
    pub const fn new(method: HttpMethod, path: &'static str) -> Self {
        Self { method, path }
    }
}

/// How Read locates the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ReadMode {
    /// The read endpoint returns the object itself.
    Get,
    /// The read endpoint returns a parent document; the object is the entry
    /// of `list_key` whose native ID matches.
    FindInList { list_key: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub create: Endpoint,
    pub read: Endpoint,
    pub read_mode: ReadMode,
    /// `None` when every input change forces replacement.
    pub update: Option<Endpoint>,
    /// `None` when the remote API cannot delete; delete becomes a no-op.
    pub delete: Option<Endpoint>,
}

/// Static description of one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub id_shape: IdShape,
    /// Input fields whose values form the ID scopes, outermost first.
    pub scope_fields: &'static [&'static str],
    /// Key of the native ID in create and read responses.
    pub native_id_key: &'static str,
    pub fields: &'static [FieldSpec],
    pub outputs: &'static [OutputSpec],
    pub endpoints: Endpoints,
}

impl ResourceDescriptor {
    /// Type token, e.g. `webflow:index:Redirect`.
    pub fn token(&self) -> String {
        format!("{TYPE_TOKEN_PREFIX}{}", self.name)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn is_scope_field(&self, name: &str) -> bool {
        self.scope_fields.contains(&name)
    }

    pub fn replacement_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| field.forces_replacement())
    }

    pub fn updatable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| !field.forces_replacement())
    }

    /// Schema fragment published by the provider.
    pub fn schema(&self) -> Value {
        let mut schema = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut schema {
            map.insert("token".into(), Value::String(self.token()));
        }
        schema
    }
}
