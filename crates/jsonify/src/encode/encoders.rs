use crate::{
    encode::{primitives, writer::EntryWriter},
    error::Result,
    extract,
    options::{DEFAULT_GETTER_PREFIX, EncodeOptions},
    record::VisibilityFilter,
    registry::ConversionRegistry,
    value::Value,
};

/// Encodes a value to compact spaced JSON text.
///
/// Dispatch order: strings, numbers, booleans, null, then records (registry
/// first, structural attribute encoding second), then containers. Recursion
/// follows the shape of the input; cyclic record graphs are the caller's
/// responsibility and do not terminate.
pub fn encode_value(
    value: &Value,
    registry: &ConversionRegistry,
    options: &EncodeOptions,
) -> Result<String> {
    encode_inner(value, registry, &options.getter_prefix, options.ignore_nulls)
}

fn encode_inner(
    value: &Value,
    registry: &ConversionRegistry,
    getter_prefix: &str,
    ignore_nulls: bool,
) -> Result<String> {
    match value {
        Value::String(s) => Ok(primitives::quote(s)),
        Value::Number(n) => Ok(primitives::format_number(n)),
        Value::Bool(b) => Ok(primitives::format_bool(*b).to_string()),
        Value::Null => Ok(primitives::format_null().to_string()),
        Value::Record(record) => {
            if let Some(convert) = registry.get(record.type_name()) {
                let replacement = convert(record)?;
                // A converted value starts over as if handed to `encode`
                // directly: default getter prefix, nulls kept. Conversions
                // chain because the replacement may be a record itself.
                return encode_inner(&replacement, registry, DEFAULT_GETTER_PREFIX, false);
            }
            let attrs = extract::attributes(record, VisibilityFilter::ANY, getter_prefix);
            encode_entries(
                attrs.iter().map(|(k, v)| (k.as_str(), v)),
                registry,
                getter_prefix,
                ignore_nulls,
            )
        }
        Value::Object(entries) => encode_entries(
            entries.iter().map(|(k, v)| (k.as_str(), v)),
            registry,
            getter_prefix,
            ignore_nulls,
        ),
        Value::Array(items) => {
            let mut w = EntryWriter::with_capacity(items.len());
            for item in items {
                let encoded = encode_inner(item, registry, getter_prefix, false)?;
                if ignore_nulls && encoded == primitives::format_null() {
                    continue;
                }
                w.entry(encoded);
            }
            Ok(w.finish_array())
        }
    }
}

fn encode_entries<'a, I>(
    entries: I,
    registry: &ConversionRegistry,
    getter_prefix: &str,
    ignore_nulls: bool,
) -> Result<String>
where
    I: Iterator<Item = (&'a str, &'a Value)>,
{
    let mut w = EntryWriter::new();
    for (key, value) in entries {
        let encoded = encode_inner(value, registry, getter_prefix, false)?;
        if ignore_nulls && encoded == primitives::format_null() {
            continue;
        }
        if primitives::is_numeric_key(key) {
            w.entry(encoded);
        } else {
            w.keyed_entry(&primitives::quote(key), &encoded);
        }
    }
    Ok(w.finish_object())
}
