//! Thin decoding layer: parsing is delegated wholesale to serde_json, this
//! module only maps the parsed tree onto [`Value`] and enforces the depth
//! limit. There is deliberately no decode-side conversion hook.

use serde_json::Value as JsonValue;

use crate::options::DecodeOptions;
use crate::record::{Record, Visibility};
use crate::value::{Number, Value};

/// Type identifier given to records produced by decoding. Registry lookups
/// match it exactly, so a conversion registered under this name applies to
/// every re-encoded decoded object.
pub const DECODED_RECORD_TYPE: &str = "object";

/// Parses JSON text. Malformed input and nesting beyond
/// `options.max_depth` both yield `None`; a legitimate JSON `null` is
/// `Some(Value::Null)`.
pub fn decode(text: &str, options: &DecodeOptions) -> Option<Value> {
    let parsed: JsonValue = serde_json::from_str(text).ok()?;
    from_json(&parsed, options, options.max_depth)
}

fn from_json(json: &JsonValue, options: &DecodeOptions, depth_left: usize) -> Option<Value> {
    match json {
        JsonValue::Null => Some(Value::Null),
        JsonValue::Bool(b) => Some(Value::Bool(*b)),
        JsonValue::String(s) => Some(Value::String(s.clone())),
        JsonValue::Number(n) => Some(from_number(n, options)),
        JsonValue::Array(items) => {
            let depth_left = depth_left.checked_sub(1)?;
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(from_json(item, options, depth_left)?);
            }
            Some(Value::Array(out))
        }
        JsonValue::Object(map) => {
            let depth_left = depth_left.checked_sub(1)?;
            if options.mappings {
                let mut entries = Vec::with_capacity(map.len());
                for (key, value) in map {
                    entries.push((key.clone(), from_json(value, options, depth_left)?));
                }
                Some(Value::Object(entries))
            } else {
                let mut record = Record::new(DECODED_RECORD_TYPE);
                for (key, value) in map {
                    let value = from_json(value, options, depth_left)?;
                    record = record.field(Visibility::Public, key.clone(), value);
                }
                Some(Value::Record(record))
            }
        }
    }
}

fn from_number(number: &serde_json::Number, options: &DecodeOptions) -> Value {
    if let Some(i) = number.as_i64() {
        return Value::Number(Number::I64(i));
    }
    if let Some(u) = number.as_u64() {
        return Value::Number(Number::U64(u));
    }
    let text = number.to_string();
    let integral = !text.contains(['.', 'e', 'E']);
    if integral && options.bigint_as_string {
        return Value::String(text);
    }
    match number.as_f64() {
        Some(f) => Value::Number(Number::F64(f)),
        None => Value::String(text),
    }
}
