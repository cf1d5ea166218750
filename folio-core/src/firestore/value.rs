//! Firestore REST documents wrap every field in a typed value object
//! (`{"stringValue": "..."}`, `{"integerValue": "42"}`, ...). These helpers
//! flatten them into plain JSON so records can be deserialized with serde.

use crate::error::FolioError;
use serde_json::{Map, Number, Value};

/// Convert a document's `fields` map into a plain JSON object
pub fn decode_fields(fields: &Map<String, Value>) -> Result<Value, FolioError> {
    let mut object = Map::with_capacity(fields.len());
    for (key, value) in fields {
        let decoded = decode_value(value)
            .map_err(|e| FolioError::InvalidDocument(format!("field '{}': {}", key, e)))?;
        object.insert(key.clone(), decoded);
    }
    Ok(Value::Object(object))
}

/// Convert a single typed Firestore value into plain JSON
pub fn decode_value(value: &Value) -> Result<Value, FolioError> {
    let typed = value
        .as_object()
        .ok_or_else(|| FolioError::InvalidDocument("expected a typed value object".to_string()))?;

    let (kind, inner) = typed
        .iter()
        .next()
        .ok_or_else(|| FolioError::InvalidDocument("empty typed value".to_string()))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| invalid(kind, inner)),
        "integerValue" => decode_integer(inner).ok_or_else(|| invalid(kind, inner)),
        "doubleValue" => decode_double(inner).ok_or_else(|| invalid(kind, inner)),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| invalid(kind, inner)),
        "geoPointValue" => Ok(inner.clone()),
        "arrayValue" => {
            // an empty array is sent as `{"arrayValue": {}}`
            let values = match inner.get("values") {
                Some(Value::Array(values)) => values.as_slice(),
                Some(other) => return Err(invalid("arrayValue.values", other)),
                None => &[],
            };
            values
                .iter()
                .map(decode_value)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        "mapValue" => match inner.get("fields") {
            Some(Value::Object(fields)) => decode_fields(fields),
            Some(other) => Err(invalid("mapValue.fields", other)),
            None => Ok(Value::Object(Map::new())),
        },
        other => Err(FolioError::InvalidDocument(format!(
            "unsupported value type '{}'",
            other
        ))),
    }
}

fn invalid(kind: &str, inner: &Value) -> FolioError {
    FolioError::InvalidDocument(format!("malformed {}: {}", kind, inner))
}

// int64 travels as a decimal string to survive JSON number precision
fn decode_integer(inner: &Value) -> Option<Value> {
    match inner {
        Value::String(s) => s.parse::<i64>().ok().map(|n| Value::Number(n.into())),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(Value::Number(n.clone())),
        _ => None,
    }
}

fn decode_double(inner: &Value) -> Option<Value> {
    let n = match inner {
        Value::Number(n) => n.as_f64()?,
        // NaN and the infinities are sent as strings
        Value::String(s) => s.parse::<f64>().ok()?,
        _ => return None,
    };
    // Integral doubles become integers so they still fit `order: i64`
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        return Some(Value::Number((n as i64).into()));
    }
    Number::from_f64(n).map(Value::Number)
}
