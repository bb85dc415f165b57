use serde::Serialize;
use serde_json::{Map, Value};

/// Deterministic cache key for `(endpoint, params)`.
///
/// Params are rendered as canonical JSON with object keys sorted at every
/// depth, so field order never changes the key. `()` and `None` render as `{}`.
pub fn cache_key<P: Serialize + ?Sized>(endpoint: &str, params: &P) -> String {
    let params = match serde_json::to_value(params) {
        Ok(Value::Null) | Err(_) => Value::Object(Map::new()),
        Ok(value) => canonicalize(value),
    };

    format!("{endpoint}?{params}")
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut fields: Vec<(String, Value)> = map.into_iter().collect();
            fields.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, canonicalize(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
