#[cfg(test)]
use super::*;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

#[test]
fn test_check_valid_files() {
    check(&[data("valid.ini"), data("test.ini")]).expect("valid files should pass");
}

#[test]
fn test_check_reports_failures() {
    let err = check(&[data("valid.ini"), data("invalid.ini"), data("missing.ini")]).unwrap_err();
    assert!(err.to_string().contains("2 of 3 files failed to parse"));
}

#[test]
fn test_dump_and_get() {
    dump(&data("valid.ini"), false).unwrap();
    dump(&data("valid.ini"), true).unwrap();
    get(&data("valid.ini"), "section_1.integer").unwrap();

    assert!(dump(&data("invalid.ini"), false).is_err());
    assert!(get(&data("valid.ini"), "section_1.nope").is_err());
}

#[test]
fn test_convert_writes_reference_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("settings.json");
    let output = dir.path().join("settings.ini");

    fs::write(
        &input,
        r#"{
    "section_1": {
        "string": "string",
        "string_2": "string",
        "integer": 10,
        "float": 10.10,
        "bool_true": true,
        "bool_true_2": true,
        "bool_true_3": true,
        "bool_false": false,
        "bool_false_2": false,
        "bool_false_3": false,
        "array": [1, 2, 3],
        "value_null": null
    },
    "section_2": {
        "array": { "yes": true, "no": false }
    }
}"#,
    )
    .unwrap();

    convert(&input, &output).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        fs::read_to_string(data("test.ini")).unwrap()
    );
}

#[test]
fn test_convert_rejects_bad_input() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.ini");

    let err = convert(&dir.path().join("absent.json"), &output).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));

    let input = dir.path().join("broken.json");
    fs::write(&input, "{ not json").unwrap();
    let err = convert(&input, &output).unwrap_err();
    assert!(err.to_string().contains("is not valid JSON"));

    fs::write(&input, r#"{ "section": "value" }"#).unwrap();
    let err = convert(&input, &output).unwrap_err();
    assert!(err.downcast_ref::<ini_cfg::IniError>().is_some_and(|e| e.is_format()));

    assert!(!output.exists());
}
