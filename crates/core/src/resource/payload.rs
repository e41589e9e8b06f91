//! Translation between resource arguments and wire documents.

use serde_json::{Map, Value};
use webflow_domain::utils::robots_txt::{self, RobotsDocument};
use webflow_domain::{
    is_empty_value, Args, Encoding, FieldSpec, ProviderError, ResourceDescriptor, ResourceId,
    ResourceState, Result,
};

/// Where state falls back to submitted arguments when a response omits a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgsFallback {
    /// Only write-only fields; used by Read so that drift stays visible.
    WriteOnly,
    /// Any field the response omits; used after Create and Update.
    All,
}

/// Scope values for a new resource, taken from its scope fields.
pub fn scopes_from_args(descriptor: &ResourceDescriptor, args: &Args) -> Result<Vec<String>> {
    descriptor
        .scope_fields
        .iter()
        .map(|name| {
            args.get_str(name).filter(|value| !value.is_empty()).map(str::to_string).ok_or_else(
                || ProviderError::validation(*name, format!("{name} is required but was not provided")),
            )
        })
        .collect()
}

/// Fill `{scopeField}` and `{id}` placeholders of an endpoint template.
pub fn render_path(
    template: &str,
    descriptor: &ResourceDescriptor,
    scopes: &[String],
    native_id: Option<&str>,
) -> Result<String> {
    let mut path = template.to_string();
    for (name, value) in descriptor.scope_fields.iter().zip(scopes) {
        path = path.replace(&format!("{{{name}}}"), value);
    }
    if path.contains("{id}") {
        let native = native_id.ok_or_else(|| {
            ProviderError::InvalidId(format!("{} endpoint {template} needs a native ID", descriptor.name))
        })?;
        path = path.replace("{id}", native);
    }
    if path.contains('{') {
        return Err(ProviderError::Config(format!(
            "{} endpoint {template} has unresolved placeholders",
            descriptor.name
        )));
    }
    Ok(path)
}

/// Path for a create call. Besides scopes, `{field}` placeholders may name
/// string inputs, e.g. adopting an existing object by its ID.
pub fn render_create_path(
    template: &str,
    descriptor: &ResourceDescriptor,
    scopes: &[String],
    args: &Args,
) -> Result<String> {
    let mut path = template.to_string();
    for field in descriptor.fields.iter().filter(|f| !descriptor.is_scope_field(f.name)) {
        let placeholder = format!("{{{}}}", field.name);
        if path.contains(&placeholder) {
            let value = args.get_str(field.name).filter(|v| !v.is_empty()).ok_or_else(|| {
                ProviderError::validation(field.name, format!("{} is required but was not provided", field.name))
            })?;
            path = path.replace(&placeholder, value);
        }
    }
    render_path(&path, descriptor, scopes, None)
}

/// Path for an existing resource identified by `id`.
pub fn render_for_id(template: &str, descriptor: &ResourceDescriptor, id: &ResourceId) -> Result<String> {
    render_path(template, descriptor, id.scopes(), id.native_id())
}

/// Request body for create: every non-scope field that is set.
pub fn build_create_body(descriptor: &ResourceDescriptor, args: &Args) -> Value {
    let mut body = Map::new();
    for field in descriptor.fields.iter().filter(|f| !descriptor.is_scope_field(f.name)) {
        if let Some(value) = args.get(field.name).filter(|v| !is_empty_value(v)) {
            encode_field(&mut body, field, value);
        }
    }
    Value::Object(body)
}

/// Request body for update: updatable fields that are set, with unique
/// fields included only when they changed.
pub fn build_update_body(descriptor: &ResourceDescriptor, args: &Args, changed: &[String]) -> Value {
    let mut body = Map::new();
    for field in descriptor.updatable_fields().filter(|f| !descriptor.is_scope_field(f.name)) {
        if field.unique && !changed.iter().any(|name| name == field.name) {
            continue;
        }
        if let Some(value) = args.get(field.name).filter(|v| !is_empty_value(v)) {
            encode_field(&mut body, field, value);
        }
    }
    Value::Object(body)
}

fn encode_field(body: &mut Map<String, Value>, field: &FieldSpec, value: &Value) {
    match (field.encoding, value) {
        (Encoding::RobotsTxt, Value::String(content)) => {
            let document = robots_txt::parse(content);
            if let Ok(Value::Object(map)) = serde_json::to_value(document) {
                body.extend(map);
            }
        }
        _ => set_path(body, field.request_key, value.clone()),
    }
}

/// Native ID from a create or read response.
pub fn extract_native_id(descriptor: &ResourceDescriptor, response: &Value) -> Option<String> {
    match get_path(response, descriptor.native_id_key)? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Entry of `response[list_key]` whose native ID equals `native_id`.
pub fn find_in_list<'a>(
    descriptor: &ResourceDescriptor,
    response: &'a Value,
    list_key: &str,
    native_id: &str,
) -> Option<&'a Value> {
    get_path(response, list_key)?
        .as_array()?
        .iter()
        .find(|entry| extract_native_id(descriptor, entry).as_deref() == Some(native_id))
}

/// Build state from a response document.
///
/// Scope fields always come from the ID. Other inputs come from the
/// response; omitted ones fall back to `args` according to `fallback`.
pub fn state_from_response(
    descriptor: &ResourceDescriptor,
    id: &ResourceId,
    response: &Value,
    args: &Args,
    fallback: ArgsFallback,
) -> ResourceState {
    let mut inputs = Args::new();

    for (name, scope) in descriptor.scope_fields.iter().zip(id.scopes()) {
        inputs.insert(*name, Value::String(scope.clone()));
    }

    for field in descriptor.fields.iter().filter(|f| !descriptor.is_scope_field(f.name)) {
        let observed = if field.write_only { None } else { decode_field(field, response) };
        let value = match observed {
            Some(value) => Some(value),
            None if field.write_only || fallback == ArgsFallback::All => args.get(field.name).cloned(),
            None => None,
        };
        if let Some(value) = value.filter(|v| !v.is_null()) {
            inputs.insert(field.name, value);
        }
    }

    let mut outputs = Map::new();
    for output in descriptor.outputs {
        if let Some(value) = get_path(response, output.response_key).filter(|v| !v.is_null()) {
            outputs.insert(output.name.to_string(), value.clone());
        }
    }

    ResourceState::new(inputs, outputs)
}

/// Projected state of a dry-run create.
pub fn preview_state(args: &Args) -> ResourceState {
    ResourceState::new(args.clone(), Map::new())
}

fn decode_field(field: &FieldSpec, response: &Value) -> Option<Value> {
    match field.encoding {
        Encoding::RobotsTxt => {
            let document: RobotsDocument = serde_json::from_value(response.clone()).ok()?;
            Some(Value::String(robots_txt::format(&document)))
        }
        Encoding::SlugList => {
            let items = get_path(response, field.response_key)?.as_array()?;
            let slugs = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(slug) => Some(Value::String(slug.clone())),
                    Value::Object(map) => map.get("slug").cloned(),
                    _ => None,
                })
                .collect();
            Some(Value::Array(slugs))
        }
        Encoding::Plain => get_path(response, field.response_key).filter(|v| !v.is_null()).cloned(),
    }
}

/// Look up a dotted path such as `data.name`.
pub fn get_path<'a>(value: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted.split('.').try_fold(value, |current, key| current.get(key))
}

/// Insert `value` at a dotted path, creating intermediate objects.
pub fn set_path(map: &mut Map<String, Value>, dotted: &str, value: Value) {
    match dotted.split_once('.') {
        None => {
            map.insert(dotted.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = map.entry(head.to_string()).or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(child) = entry {
                set_path(child, rest, value);
            }
        }
    }
}
