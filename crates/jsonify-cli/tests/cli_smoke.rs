use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("jsonify-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn normalizes_json_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let input = "{\n  \"a\": 1,\n  \"b\": [true, \"x\"]\n}\n";
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("jsonify-cli"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert_eq!(out.trim_end(), r#"{ "a": 1, "b": [ true, "x" ] }"#);

    // The spaced form is still JSON
    let v: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(v, serde_json::json!({"a": 1, "b": [true, "x"]}));
    Ok(())
}

#[test]
fn ignore_nulls_drops_top_level_entries() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", r#"{"x": null, "y": 2}"#)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("jsonify-cli"))
        .arg("--ignore-nulls")
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert_eq!(out.trim_end(), r#"{ "y": 2 }"#);
    Ok(())
}

#[test]
fn invalid_json_fails_with_message() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "not json")?;

    Command::new(assert_cmd::cargo::cargo_bin!("jsonify-cli"))
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
    Ok(())
}
