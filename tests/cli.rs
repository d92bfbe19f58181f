#![cfg(feature = "cli")]
use assert_cmd::Command;
use insta::assert_snapshot;
use rstest::rstest;
use std::fs;
use tempfile::tempdir;

fn run_fixture(schema_path: &str, stem: &str) {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("out").join(format!("{stem}.js"));

    // Run CLI straight on the fixture so relative $refs resolve next to it
    Command::cargo_bin("jsonschema2jsdoc")
        .unwrap()
        .arg(schema_path)
        .arg(output_path.to_str().unwrap())
        .assert()
        .success();

    let output = fs::read_to_string(&output_path).unwrap();

    assert_snapshot!(stem, output);
}

#[rstest]
#[case("sample")]
#[case("nested_objects")]
#[case("external_refs")]
#[case("empty_properties")]
#[case("large_enum")]
fn cli_fixtures(#[case] stem: &str) {
    let schema_path = format!("tests/fixtures/jsonschema/{stem}.json");
    run_fixture(&schema_path, stem);
}

#[test]
fn reports_written_file_on_stdout() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("sample.js");

    let assert = Command::cargo_bin("jsonschema2jsdoc")
        .unwrap()
        .arg("tests/fixtures/jsonschema/sample.json")
        .arg(&output_path)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Converted JSON schema to JSDoc file:"));
    assert!(stdout.contains("sample.js"));
}

#[test]
fn custom_type_suffix() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("sample.js");

    Command::cargo_bin("jsonschema2jsdoc")
        .unwrap()
        .arg("tests/fixtures/jsonschema/sample.json")
        .arg(&output_path)
        .args(["--type-suffix", "Def"])
        .assert()
        .success();

    let output = fs::read_to_string(&output_path).unwrap();
    assert!(output.contains(" * @typedef {Object} PersonDef\n"));
    assert!(output.contains("/** @type {ContactCodesDef} */ \n"));
    assert!(!output.contains("PersonType"));
}

#[rstest]
#[case::no_arguments(&[], "An input path and an output path are required.")]
#[case::no_output(&["tests/fixtures/jsonschema/sample.json"], "An output path is required.")]
#[case::missing_input(&["tests/fixtures/jsonschema/missing.json", "out.js"], "input schema not found")]
fn rejects_bad_arguments(#[case] args: &[&str], #[case] message: &str) {
    let assert = Command::cargo_bin("jsonschema2jsdoc")
        .unwrap()
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(args)
        .env("NO_COLOR", "1")
        .assert()
        .failure()
        .code(1);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains(message), "stderr was: {stderr}");
}

#[test]
fn circular_reference_is_fatal() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("loop.json");
    let output_path = dir.path().join("loop.js");
    fs::write(
        &input_path,
        r##"{
            "definitions": {
                "Node": {
                    "type": "object",
                    "properties": { "next": { "$ref": "#/definitions/Node" } }
                }
            },
            "properties": { "List": { "$ref": "#/definitions/Node" } }
        }"##,
    )
    .unwrap();

    let assert = Command::cargo_bin("jsonschema2jsdoc")
        .unwrap()
        .arg(&input_path)
        .arg(&output_path)
        .assert()
        .failure()
        .code(1);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("circular $ref"), "stderr was: {stderr}");
    assert!(!output_path.exists());
}
