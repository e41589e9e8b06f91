//! Resource arguments, persisted state, and operation outcomes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{ProviderError, Result};

/// User-declared inputs for one resource, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Args(Map<String, Value>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a JSON object; anything else is rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(ProviderError::validation(
                "args",
                format!("resource arguments must be a JSON object, got {other}"),
            )),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value.into());
        self
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Args {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Persisted snapshot of a resource: the inputs as last observed plus the
/// read-only outputs reported by the remote API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    #[serde(default)]
    pub inputs: Args,
    #[serde(default)]
    pub outputs: Map<String, Value>,
}

impl ResourceState {
    pub fn new(inputs: Args, outputs: Map<String, Value>) -> Self {
        Self { inputs, outputs }
    }

    pub fn output(&self, name: &str) -> Option<&Value> {
        self.outputs.get(name)
    }
}

/// Result of comparing desired inputs against stored state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub has_changes: bool,
    pub forces_replacement: bool,
    pub delete_before_replace: bool,
    pub changed_fields: Vec<String>,
}

impl DiffResult {
    pub fn no_changes() -> Self {
        Self::default()
    }

    /// Replacement must delete first: these resources hold unique remote
    /// keys, so a create-then-delete would collide.
    pub fn replace(field: impl Into<String>) -> Self {
        Self {
            has_changes: true,
            forces_replacement: true,
            delete_before_replace: true,
            changed_fields: vec![field.into()],
        }
    }

    pub fn update(changed_fields: Vec<String>) -> Self {
        Self { has_changes: !changed_fields.is_empty(), changed_fields, ..Self::default() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateOutcome {
    /// Encoded composite ID.
    pub id: String,
    pub state: ResourceState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    Found(ResourceState),
    /// The remote object no longer exists.
    Gone,
}

impl ReadOutcome {
    pub fn into_state(self) -> Option<ResourceState> {
        match self {
            Self::Found(state) => Some(state),
            Self::Gone => None,
        }
    }
}

/// Missing, null, empty string, empty list, and empty object all count as
/// "not set". Zero and `false` are real values.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
