use crate::number::format_decimal_f64;
use crate::value::Number;

pub fn format_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

pub fn format_null() -> &'static str {
    "null"
}

/// Native decimal text for a number. NaN and the infinities have no JSON
/// representation and take the permissive unsupported-shape path: they
/// format to nothing at all.
pub fn format_number(n: &Number) -> String {
    match n {
        Number::I64(i) => i.to_string(),
        Number::U64(u) => u.to_string(),
        Number::F64(f) if f.is_finite() => format_decimal_f64(*f),
        Number::F64(_) => String::new(),
    }
}

/// Escapes string content for embedding between double quotes: every `"`
/// becomes `\"`, then any `\'` sequence collapses to a plain `'`.
///
/// The second pass undoes over-eager escaping by upstream producers (a
/// `\'` inside a JSON string trips some JavaScript consumers). It cannot
/// tell that case apart from a backslash the caller meant literally before
/// a single quote, which gets eaten too. Kept as-is for output
/// compatibility.
pub fn fix_string(s: &str) -> String {
    s.replace('"', "\\\"").replace("\\'", "'")
}

pub fn quote(s: &str) -> String {
    let fixed = fix_string(s);
    let mut out = String::with_capacity(fixed.len() + 2);
    out.push('"');
    out.push_str(&fixed);
    out.push('"');
    out
}

/// Mapping keys that read as numbers render positionally, like sequence
/// items. Numeric means: optional leading whitespace, then decimal or
/// scientific notation (not hex, not the inf/nan words).
pub fn is_numeric_key(key: &str) -> bool {
    let t = key.trim_start();
    if t.is_empty() {
        return false;
    }
    if t.chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return false;
    }
    t.parse::<f64>().is_ok()
}
