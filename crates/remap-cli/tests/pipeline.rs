//! End-to-end tests for the prepare pipeline.

use std::fs;
use std::path::PathBuf;

use remap_cli::pipeline;
use remap_model::Config;

fn write_input(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.csv");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn config(json: &str) -> Config {
    serde_json::from_str(json).unwrap()
}

const REFERENCE_CONFIG: &str = r#"{
    "columns": [
        { "from": 0, "title": "Name" },
        { "from": 1, "discard": true, "title": "x" },
        { "from": 2, "title": "Year", "filters": ["trim"] }
    ],
    "new-columns": [
        { "title": "Full", "generator": "joinAll" }
    ]
}"#;

#[test]
fn test_reference_run() {
    let (_dir, input) = write_input("Ada;ignored; 1990 \n");
    let mut sink = Vec::new();
    let outcome = pipeline::run(&config(REFERENCE_CONFIG), &input, &mut sink).unwrap();

    assert_eq!(outcome.records, 1);
    assert_eq!(outcome.columns, vec!["Name", "Year", "Full"]);
    // joinAll sees the raw record (untrimmed third field), and its value
    // contains the output delimiter, so it is quoted.
    let output = String::from_utf8(sink).unwrap();
    assert_eq!(output, "Name;Year;Full\nAda;1990;\"Ada;ignored; 1990 \"\n");
}

#[test]
fn test_distinct_input_and_output_separators() {
    let json = r#"{
        "input-separator": ",",
        "output-separator": "|",
        "columns": [
            { "from": 1, "title": "B" },
            { "from": 0, "title": "A" }
        ]
    }"#;
    let (_dir, input) = write_input("a,b\nc,d\n");
    let mut sink = Vec::new();
    pipeline::run(&config(json), &input, &mut sink).unwrap();

    let output = String::from_utf8(sink).unwrap();
    assert_eq!(output, "B|A\nb|a\nd|c\n");
}

#[test]
fn test_output_order_equals_input_order() {
    let json = r#"{ "columns": [ { "from": 0, "title": "N" } ] }"#;
    let (_dir, input) = write_input("3\n1\n2\n");
    let mut sink = Vec::new();
    pipeline::run(&config(json), &input, &mut sink).unwrap();

    assert_eq!(String::from_utf8(sink).unwrap(), "N\n3\n1\n2\n");
}

#[test]
fn test_empty_input_still_writes_header() {
    let (_dir, input) = write_input("");
    let mut sink = Vec::new();
    let outcome = pipeline::run(&config(REFERENCE_CONFIG), &input, &mut sink).unwrap();

    assert_eq!(outcome.records, 0);
    assert_eq!(String::from_utf8(sink).unwrap(), "Name;Year;Full\n");
}

#[test]
fn test_rerun_is_byte_identical() {
    let (_dir, input) = write_input("Ada;ignored; 1990 \nGrace;x; 1906 \n");
    let parsed = config(REFERENCE_CONFIG);

    let mut first = Vec::new();
    pipeline::run(&parsed, &input, &mut first).unwrap();
    let mut second = Vec::new();
    pipeline::run(&parsed, &input, &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_failure_leaves_earlier_rows_written() {
    // Second record is too short for the configured index.
    let json = r#"{ "columns": [ { "from": 1, "title": "B" } ] }"#;
    let (_dir, input) = write_input("a;b\nshort\n");
    let mut sink = Vec::new();
    let error = pipeline::run(&config(json), &input, &mut sink).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("record 2"));
    assert!(message.contains("out of range"));
    // The header and the first transformed row were already emitted.
    assert_eq!(String::from_utf8(sink).unwrap(), "B\nb\n");
}

#[test]
fn test_unknown_filter_reports_available_names() {
    let json = r#"{ "columns": [ { "from": 0, "title": "V", "filters": ["rot13"] } ] }"#;
    let (_dir, input) = write_input("x\n");
    let mut sink = Vec::new();
    let error = pipeline::run(&config(json), &input, &mut sink).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("rot13"));
    assert!(message.contains("available filters"));
    assert!(message.contains("trim"));
}

#[test]
fn test_unknown_generator_reports_available_names() {
    let json = r#"{ "new-columns": [ { "title": "T", "generator": "now" } ] }"#;
    let (_dir, input) = write_input("x\n");
    let mut sink = Vec::new();
    let error = pipeline::run(&config(json), &input, &mut sink).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("now"));
    assert!(message.contains("available generators"));
    assert!(message.contains("joinAll"));
}

#[test]
fn test_missing_input_file_fails() {
    let json = r#"{ "columns": [ { "from": 0, "title": "A" } ] }"#;
    let mut sink = Vec::new();
    let error = pipeline::run(
        &config(json),
        &PathBuf::from("/nonexistent/input.csv"),
        &mut sink,
    )
    .unwrap_err();

    assert!(format!("{error:#}").contains("cannot open input file"));
}

#[test]
fn test_bad_separator_fails_before_reading_input() {
    let json = r#"{ "input-separator": "ab", "columns": [ { "from": 0, "title": "A" } ] }"#;
    let mut sink = Vec::new();
    let error = pipeline::run(
        &config(json),
        &PathBuf::from("/nonexistent/input.csv"),
        &mut sink,
    )
    .unwrap_err();

    // The separator is rejected first; the missing input is never touched.
    assert!(format!("{error:#}").contains("input-separator"));
}
