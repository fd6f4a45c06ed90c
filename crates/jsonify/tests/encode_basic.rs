use jsonify::{ConversionRegistry, EncodeOptions, Number, Value, encode_to_string};

fn encode(value: &Value) -> jsonify::Result<String> {
    encode_to_string(value, &ConversionRegistry::new(), &EncodeOptions::default())
}

#[test]
fn encodes_primitives() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(encode(&Value::Null)?, "null");
    assert_eq!(encode(&Value::Bool(true))?, "true");
    assert_eq!(encode(&Value::Bool(false))?, "false");
    assert_eq!(encode(&Value::from(42i64))?, "42");
    assert_eq!(encode(&Value::from(-7i64))?, "-7");
    assert_eq!(encode(&Value::from(u64::MAX))?, "18446744073709551615");
    Ok(())
}

#[test]
fn floats_render_as_plain_decimal_text() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(encode(&Value::from(1.5))?, "1.5");
    assert_eq!(encode(&Value::from(1.0))?, "1");
    assert_eq!(encode(&Value::from(-0.5))?, "-0.5");
    assert_eq!(encode(&Value::from(-0.0))?, "0");
    // No exponent notation, even where shortest-form would use it
    assert_eq!(encode(&Value::from(1e21))?, "1000000000000000000000");
    assert_eq!(encode(&Value::from(1e-5))?, "0.00001");
    Ok(())
}

#[test]
fn nonfinite_floats_encode_to_nothing() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(encode(&Value::Number(Number::F64(f64::NAN)))?, "");
    assert_eq!(encode(&Value::Number(Number::F64(f64::INFINITY)))?, "");
    Ok(())
}

#[test]
fn plain_strings_are_quoted_verbatim() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(encode(&Value::from("hello"))?, "\"hello\"");
    assert_eq!(encode(&Value::from(""))?, "\"\"");
    assert_eq!(encode(&Value::from("it's fine"))?, "\"it's fine\"");
    Ok(())
}

#[test]
fn double_quotes_are_escaped() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(encode(&Value::from("say \"hi\""))?, "\"say \\\"hi\\\"\"");
    Ok(())
}

#[test]
fn escaped_single_quotes_collapse() -> Result<(), Box<dyn std::error::Error>> {
    // An upstream producer that over-escaped its quotes gets unescaped...
    assert_eq!(encode(&Value::from("it\\'s"))?, "\"it's\"");
    // ...even when the backslash was meant literally (known caveat).
    assert_eq!(encode(&Value::from("a\\'b"))?, "\"a'b\"");
    Ok(())
}

#[test]
fn empty_containers_are_space_padded() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(encode(&Value::Array(vec![]))?, "[  ]");
    assert_eq!(encode(&Value::Object(vec![]))?, "{  }");
    Ok(())
}

#[test]
fn arrays_join_entries_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let v = Value::Array(vec![Value::from(1i64), Value::from(2i64), Value::from(3i64)]);
    assert_eq!(encode(&v)?, "[ 1, 2, 3 ]");
    Ok(())
}

#[test]
fn objects_render_quoted_keys_in_insertion_order() -> Result<(), Box<dyn std::error::Error>> {
    let v = Value::Object(vec![
        ("z".into(), Value::from(1i64)),
        ("a".into(), Value::from("x")),
    ]);
    assert_eq!(encode(&v)?, "{ \"z\": 1, \"a\": \"x\" }");
    Ok(())
}

#[test]
fn numeric_keys_render_positionally() -> Result<(), Box<dyn std::error::Error>> {
    let v = Value::Object(vec![
        ("0".into(), Value::from(true)),
        ("1".into(), Value::from("x")),
        ("label".into(), Value::from(9i64)),
    ]);
    assert_eq!(encode(&v)?, "{ true, \"x\", \"label\": 9 }");
    Ok(())
}

#[test]
fn key_words_that_are_not_numbers_stay_keyed() -> Result<(), Box<dyn std::error::Error>> {
    let v = Value::Object(vec![
        ("inf".into(), Value::from(1i64)),
        ("NaN".into(), Value::from(2i64)),
        ("1e3".into(), Value::from(3i64)),
    ]);
    assert_eq!(encode(&v)?, "{ \"inf\": 1, \"NaN\": 2, 3 }");
    Ok(())
}

#[test]
fn nested_structures_compose() -> Result<(), Box<dyn std::error::Error>> {
    let v = Value::Object(vec![
        (
            "list".into(),
            Value::Array(vec![Value::Null, Value::from(false)]),
        ),
        (
            "inner".into(),
            Value::Object(vec![("k".into(), Value::from("v"))]),
        ),
    ]);
    assert_eq!(
        encode(&v)?,
        "{ \"list\": [ null, false ], \"inner\": { \"k\": \"v\" } }"
    );
    Ok(())
}
