//! Integration tests for artifact paths and disk writers

use arrow::array::{Array, Float64Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::ipc::reader::FileReader;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;
use std::fs::File;
use surveyor::core::output::{artifact_path, write_frame, write_json};
use surveyor::core::table::TableSource;
use surveyor::domain::SurveyorError;
use tempfile::TempDir;

fn instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(14, 30, 5)
        .unwrap()
}

#[test]
fn path_construction_is_pure() {
    let base = TempDir::new().unwrap();

    let first = artifact_path(
        base.path(),
        "proj",
        "Survey 1",
        "responseexports",
        "feather",
        true,
        instant(),
    )
    .unwrap();
    let second = artifact_path(
        base.path(),
        "proj",
        "Survey 1",
        "responseexports",
        "feather",
        true,
        instant(),
    )
    .unwrap();

    assert_eq!(first, second);
}

#[test]
fn same_day_paths_overwrite_rather_than_collide() {
    let base = TempDir::new().unwrap();
    let morning = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let evening = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(21, 0, 0)
        .unwrap();

    let first = artifact_path(base.path(), "p", "s", "survey", "json", false, morning).unwrap();
    let second = artifact_path(base.path(), "p", "s", "survey", "json", false, evening).unwrap();
    assert_eq!(first, second);

    // Both writes succeed; the second replaces the first
    write_json(&json!({"version": 1}), &first).unwrap();
    write_json(&json!({"version": 2}), &second).unwrap();

    let contents = std::fs::read_to_string(&second).unwrap();
    assert!(contents.contains("\"version\": 2"));
}

#[test]
fn missing_base_directory_fails_before_io() {
    let base = TempDir::new().unwrap();
    let missing = base.path().join("does_not_exist");

    let result = artifact_path(&missing, "p", "s", "t", "json", false, instant());
    assert!(matches!(result, Err(SurveyorError::Configuration(_))));
}

#[test]
fn written_json_is_sorted_and_ascii() {
    let base = TempDir::new().unwrap();
    let path = base.path().join("definition.json");

    let data = json!({"zeta": "caf\u{e9}", "alpha": 1});
    let written = write_json(&data, &path).unwrap();

    assert!(written.is_absolute());
    let contents = std::fs::read_to_string(&written).unwrap();

    // Keys sorted
    let alpha = contents.find("alpha").unwrap();
    let zeta = contents.find("zeta").unwrap();
    assert!(alpha < zeta);

    // Non-ASCII escaped
    assert!(contents.contains("caf\\u00e9"));
    assert!(contents.is_ascii());

    // Still valid JSON that round-trips
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["zeta"], "caf\u{e9}");
}

#[test]
fn written_frame_round_trips_through_arrow() {
    let base = TempDir::new().unwrap();
    let path = base.path().join("responses.feather");

    let frame = TableSource::Records(vec![
        json!({"q1": "a", "score": 1, "weight": 0.5}),
        json!({"q1": "", "score": 2}),
    ])
    .materialize()
    .unwrap();

    let written = write_frame(&frame, &path).unwrap();
    assert!(written.is_absolute());

    let reader = FileReader::try_new(File::open(&written).unwrap(), None).unwrap();
    let schema = reader.schema();
    assert_eq!(schema.field(0).name(), "q1");
    assert_eq!(schema.field(0).data_type(), &DataType::Utf8);
    assert_eq!(schema.field(1).data_type(), &DataType::Int64);
    assert_eq!(schema.field(2).data_type(), &DataType::Float64);

    let batches: Vec<_> = reader.collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(batches.len(), 1);
    let batch = &batches[0];
    assert_eq!(batch.num_rows(), 2);

    let q1 = batch
        .column(0)
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap();
    assert_eq!(q1.value(0), "a");
    // Sanitization happened before the write: the empty cell is a space
    assert_eq!(q1.value(1), " ");

    let score = batch
        .column(1)
        .as_any()
        .downcast_ref::<Int64Array>()
        .unwrap();
    assert_eq!(score.value(0), 1);
    assert_eq!(score.value(1), 2);

    let weight = batch
        .column(2)
        .as_any()
        .downcast_ref::<Float64Array>()
        .unwrap();
    assert_eq!(weight.value(0), 0.5);
    assert!(weight.is_null(1));
}

#[test]
fn frame_with_no_columns_is_rejected() {
    let base = TempDir::new().unwrap();
    let path = base.path().join("empty.feather");

    let frame = TableSource::Records(vec![]).materialize().unwrap();
    let err = write_frame(&frame, &path).unwrap_err();

    match err {
        SurveyorError::Output(surveyor::domain::OutputError::Write { path, reason }) => {
            assert!(path.contains("empty.feather"));
            assert!(reason.contains("no columns"));
        }
        other => panic!("expected Output error, got: {other}"),
    }
}

#[test]
fn write_failure_names_the_resolved_path() {
    let base = TempDir::new().unwrap();
    // Parent directory does not exist, so the create fails
    let path = base.path().join("missing_dir").join("out.json");

    let err = write_json(&json!({}), &path).unwrap_err();
    match err {
        SurveyorError::Output(surveyor::domain::OutputError::Write { path, .. }) => {
            assert!(path.contains("out.json"));
            assert!(std::path::Path::new(&path).is_absolute());
        }
        other => panic!("expected Output error, got: {other}"),
    }
}

#[test]
fn full_artifact_layout_end_to_end() {
    let base = TempDir::new().unwrap();

    let frame = TableSource::Records(vec![json!({"q1": "yes"})])
        .materialize()
        .unwrap();

    let path = artifact_path(
        base.path(),
        "customer_feedback",
        "Survey 1",
        "responseexports",
        "feather",
        false,
        instant(),
    )
    .unwrap();
    let written = write_frame(&frame, &path).unwrap();

    assert!(written.ends_with(
        "customer_feedback/20240601_Survey 1_responseexports.feather"
    ));
    assert!(written.exists());
}
