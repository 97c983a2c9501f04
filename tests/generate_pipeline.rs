#![cfg(feature = "generator")]

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};

use mimedesc::generator::{
    self, check_source, extract_descriptions, render_table, GenerateError, GeneratorConfig, Source,
};

// Table rendered from shared-mime-info-sample.xml, compiled into this test.
mod sample {
    include!("fixtures/sample_table.rs");
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn config_for(input: PathBuf, output: PathBuf) -> GeneratorConfig {
    GeneratorConfig {
        source: Source::File(input),
        output,
        timeout: None,
    }
}

/// Decode a generated table back into a map, the way the compiler would see it.
fn decode_table(src: &str) -> HashMap<String, String> {
    let literals = check_source(src).expect("generated source must lex");
    assert_eq!(literals.len() % 2, 0);
    literals
        .chunks(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}

#[test]
fn test_generates_table_from_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("data.rs");

    let summary = generator::run(&config_for(
        fixture("shared-mime-info-sample.xml"),
        output.clone(),
    ))
    .unwrap();
    assert_eq!(summary.entries, 6);
    assert_eq!(summary.output, output);

    let src = fs::read_to_string(&output).unwrap();
    assert!(src.starts_with("// Code generated by mimedesc-gen; DO NOT EDIT.\n// This file was generated on "));
    assert!(src.contains("pub(crate) static MIME_DESCRIPTIONS: phf::Map<&'static str, &'static str>"));
    assert!(src.contains(r#""application/x-quoted" => "He said \"hi\"\\now","#));

    let table = decode_table(&src);
    assert_eq!(table.len(), 6);
    assert_eq!(table["text/plain"], "Plain text document");
    assert_eq!(table["application/pdf"], "PDF document");
    assert_eq!(table["application/x-quoted"], r#"He said "hi"\now"#);
    assert_eq!(table["image/x-amp"], "Tom & Jerry <cartoon>");
    assert_eq!(table["text/x-duplicate"], "Second description");
    assert_eq!(
        table["text/x-special"],
        "tab\tcrlf\r\n{brace} it's /* not a comment */"
    );
    assert!(!table.contains_key("application/x-no-comment"));
    assert!(!table.contains_key("application/x-empty-comment"));
    assert!(!table.contains_key("application/unknown"));
}

#[test]
fn test_sample_fixture_matches_renderer() {
    let input = BufReader::new(File::open(fixture("shared-mime-info-sample.xml")).unwrap());
    let table = extract_descriptions(input).unwrap();
    let rendered = render_table(&table, UNIX_EPOCH + Duration::from_secs(1_792_398_600)).unwrap();
    assert_eq!(rendered, fs::read_to_string(fixture("sample_table.rs")).unwrap());
}

#[test]
fn test_rendered_table_compiles_and_looks_up() {
    let table = &sample::MIME_DESCRIPTIONS;
    assert_eq!(table.len(), 6);
    assert_eq!(table.get("text/plain"), Some(&"Plain text document"));
    assert_eq!(table.get("application/x-quoted"), Some(&r#"He said "hi"\now"#));
    assert_eq!(table.get("image/x-amp"), Some(&"Tom & Jerry <cartoon>"));
    assert_eq!(table.get("text/x-duplicate"), Some(&"Second description"));
    assert_eq!(
        table.get("text/x-special"),
        Some(&"tab\tcrlf\r\n{brace} it's /* not a comment */")
    );
    assert_eq!(table.get("application/x-no-comment"), None);
    assert_eq!(table.get("application/unknown"), None);
}

#[test]
fn test_malformed_xml_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.xml");
    fs::write(
        &input,
        r#"<mime-info><mime-type type="text/plain"><comment>Plain</glob></mime-type></mime-info>"#,
    )
    .unwrap();
    let output = dir.path().join("data.rs");
    let config = config_for(input, output.clone());

    for _ in 0..2 {
        let err = generator::run(&config).unwrap_err();
        assert!(matches!(err, GenerateError::Decode(_)), "unexpected error: {err}");
        assert!(!output.exists());
    }
}

#[test]
fn test_failed_run_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("orphan.xml");
    fs::write(
        &input,
        "<mime-info><mime-type><comment>No type attribute</comment></mime-type></mime-info>",
    )
    .unwrap();
    let output = dir.path().join("data.rs");
    fs::write(&output, "previous contents\n").unwrap();

    let err = generator::run(&config_for(input, output.clone())).unwrap_err();
    assert!(matches!(err, GenerateError::Decode(_)));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous contents\n");
}

#[test]
fn test_missing_input_is_a_fetch_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("data.rs");
    let err = generator::run(&config_for(dir.path().join("absent.xml"), output.clone()))
        .unwrap_err();
    assert!(matches!(err, GenerateError::Fetch(_)));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing-dir/data.rs");
    let err = generator::run(&config_for(
        fixture("shared-mime-info-sample.xml"),
        output,
    ))
    .unwrap_err();
    assert!(matches!(err, GenerateError::Write(_)));
}

#[test]
fn test_checked_in_table_is_well_formed() {
    let src = fs::read_to_string(Path::new(env!("CARGO_MANIFEST_DIR")).join("src/data.rs")).unwrap();
    let table = decode_table(&src);
    assert_eq!(table.len(), mimedesc::len());
    for (mime_type, description) in &table {
        assert!(!mime_type.is_empty());
        assert!(!description.is_empty());
        assert_eq!(mimedesc::lookup(mime_type), (description.as_str(), true));
    }
}
