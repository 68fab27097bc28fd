//! Error-path tests for the record file codec.

use std::fs;

use argus_record::{
    FieldDescriptor, FileSource, Record, RecordError, RecordSource, Schema, write_records,
};

fn one_field_schema() -> Schema {
    Schema::new(vec![FieldDescriptor::continuous("x", 1.0)])
}

#[test]
fn missing_file_is_reported_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.bin");
    let result = FileSource::open(&path);
    match result {
        Err(RecordError::FileNotFound { path: p }) => assert_eq!(p, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn truncated_header_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.bin");
    fs::write(&path, [1u8, 0, 0]).unwrap();
    let result = FileSource::open(&path);
    assert!(matches!(result, Err(RecordError::Io { .. })));
}

#[test]
fn truncated_record_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.bin");
    let records = vec![
        Record::new(0, vec![1.0], vec![]),
        Record::new(1, vec![2.0], vec![]),
    ];
    write_records(&path, &one_field_schema(), &records).unwrap();

    // Chop the last four bytes off the second record.
    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 4]).unwrap();

    let mut source = FileSource::open(&path).unwrap();
    assert!(source.next_record().unwrap().is_some());
    let result = source.next_record();
    assert!(matches!(result, Err(RecordError::Io { .. })));
}

#[test]
fn unknown_field_kind_code_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.bin");
    write_records(&path, &one_field_schema(), &[]).unwrap();

    // Header layout: 4 i32s, then "x" as (len=1, byte), then the kind code.
    let mut bytes = fs::read(&path).unwrap();
    let kind_offset = 16 + 4 + 1;
    bytes[kind_offset..kind_offset + 4].copy_from_slice(&7i32.to_le_bytes());
    fs::write(&path, &bytes).unwrap();

    let result = FileSource::open(&path);
    assert!(matches!(
        result,
        Err(RecordError::InvalidFieldKind { code: 7 })
    ));
}

#[test]
fn header_field_count_mismatch_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.bin");
    write_records(&path, &one_field_schema(), &[]).unwrap();

    // Claim two real fields while the descriptors define one.
    let mut bytes = fs::read(&path).unwrap();
    bytes[4..8].copy_from_slice(&2i32.to_le_bytes());
    fs::write(&path, &bytes).unwrap();

    let result = FileSource::open(&path);
    assert!(matches!(result, Err(RecordError::InvalidHeader { .. })));
}

#[test]
fn negative_record_count_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.bin");
    write_records(&path, &one_field_schema(), &[]).unwrap();

    let mut bytes = fs::read(&path).unwrap();
    bytes[0..4].copy_from_slice(&(-1i32).to_le_bytes());
    fs::write(&path, &bytes).unwrap();

    let result = FileSource::open(&path);
    assert!(matches!(result, Err(RecordError::InvalidHeader { .. })));
}

#[test]
fn writer_rejects_malformed_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.bin");
    let records = vec![
        Record::new(0, vec![1.0], vec![]),
        Record::new(1, vec![1.0, 2.0], vec![]),
    ];
    let result = write_records(&path, &one_field_schema(), &records);
    assert!(matches!(
        result,
        Err(RecordError::RecordShapeMismatch {
            index: 1,
            which: "real",
            expected: 1,
            got: 2,
        })
    ));
}

#[test]
fn seek_past_end_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.bin");
    write_records(
        &path,
        &one_field_schema(),
        &[Record::new(0, vec![1.0], vec![])],
    )
    .unwrap();

    let mut source = FileSource::open(&path).unwrap();
    let result = source.seek_to(2);
    assert!(matches!(
        result,
        Err(RecordError::PositionOutOfRange { pos: 2, len: 1 })
    ));
}
