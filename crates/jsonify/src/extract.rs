//! Attribute extraction: turns a record into an ordered name → value list.

use crate::record::{AttributeProvider, Record, VisibilityFilter};
use crate::value::Value;

/// Enumerates a record's attributes in declaration order.
///
/// For declared fields, a method named `{prefix}{CapitalizedFieldName}`
/// takes precedence; without one the field value is read directly,
/// whatever its declared visibility. Name-dispatched records resolve every
/// known name through their accessor (the filter does not apply there:
/// the record already chose what to expose).
pub fn attributes(
    record: &Record,
    filter: VisibilityFilter,
    getter_prefix: &str,
) -> Vec<(String, Value)> {
    match record.provider() {
        AttributeProvider::NameDispatched { names, accessor } => names
            .iter()
            .map(|name| (name.clone(), accessor(name)))
            .collect(),
        AttributeProvider::DeclaredGetters { fields, methods } => {
            let mut out = Vec::with_capacity(fields.len());
            for field in fields {
                if !filter.allows(field.visibility) {
                    continue;
                }
                let getter = getter_name(getter_prefix, &field.name);
                let value = match methods.iter().find(|(name, _)| *name == getter) {
                    Some((_, method)) => method(),
                    None => field.value.clone(),
                };
                out.push((field.name.clone(), value));
            }
            out
        }
    }
}

fn getter_name(prefix: &str, field: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + field.len());
    name.push_str(prefix);
    let mut chars = field.chars();
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
    }
    name
}
