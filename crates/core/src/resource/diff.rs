//! Change detection between stored state and desired inputs.

use serde_json::Value;
use webflow_domain::utils::robots_txt;
use webflow_domain::{is_empty_value, Args, DiffResult, Encoding, FieldSpec, ResourceDescriptor, ResourceState};

/// Compare `state.inputs` with `args`.
///
/// Replacement fields are checked first; the first changed one short-circuits
/// into a delete-before-replace result. A field that is empty on either side
/// is treated as unchanged, so state written before a field existed does not
/// trigger spurious changes.
pub fn diff(descriptor: &ResourceDescriptor, state: &ResourceState, args: &Args) -> DiffResult {
    if let Some(field) = descriptor
        .replacement_fields()
        .find(|field| field_changed(field, state.inputs.get(field.name), args.get(field.name)))
    {
        return DiffResult::replace(field.name);
    }

    let changed = descriptor
        .updatable_fields()
        .filter(|field| field_changed(field, state.inputs.get(field.name), args.get(field.name)))
        .map(|field| field.name.to_string())
        .collect();

    DiffResult::update(changed)
}

/// True when both sides carry a value and the values differ.
pub fn field_changed(field: &FieldSpec, old: Option<&Value>, new: Option<&Value>) -> bool {
    match (old, new) {
        (Some(old), Some(new)) if !is_empty_value(old) && !is_empty_value(new) => {
            !values_equal(field, old, new)
        }
        _ => false,
    }
}

fn values_equal(field: &FieldSpec, old: &Value, new: &Value) -> bool {
    match (field.encoding, old, new) {
        (Encoding::RobotsTxt, Value::String(a), Value::String(b)) => {
            robots_txt::normalize(a) == robots_txt::normalize(b)
        }
        _ => json_equal(old, new),
    }
}

/// Structural equality that treats `301` and `301.0` as the same number.
fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => x.as_f64() == y.as_f64(),
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_equal(x, y))
        }
        (Value::Object(xm), Value::Object(ym)) => {
            xm.len() == ym.len()
                && xm.iter().all(|(key, x)| ym.get(key).is_some_and(|y| json_equal(x, y)))
        }
        _ => a == b,
    }
}
