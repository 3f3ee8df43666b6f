//! Response envelope handling
//!
//! Every response is wrapped as `{"success": bool, "data": ...}`.

use serde_json::Value;

use crate::error::{RestError, RestResult};

/// Split an envelope into its payload or the failed envelope.
///
/// `success: true` yields `data` (null when absent). Anything else, including
/// a body that is not an object, is returned whole as the error side.
pub fn unwrap_envelope(envelope: Value) -> Result<Value, Value> {
    match envelope.get("success") {
        Some(Value::Bool(true)) => match envelope {
            Value::Object(mut map) => Ok(map.remove("data").unwrap_or(Value::Null)),
            _ => Ok(Value::Null),
        },
        _ => Err(envelope),
    }
}

/// Return the first element of a list payload whose `key` field equals `wanted`.
///
/// Used where the backend only offers a "list all" endpoint.
pub fn find_by_key(payload: Value, key: &str, wanted: &str) -> RestResult<Value> {
    let items = match payload {
        Value::Array(items) => items,
        other => {
            return Err(RestError::MalformedResponse(format!(
                "expected a list to search for {}, got {}",
                wanted,
                value_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .find(|item| item.get(key).and_then(Value::as_str) == Some(wanted))
        .ok_or_else(|| RestError::NotFound {
            market: wanted.to_string(),
        })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
