use tablecsv::domain::{DumpRequest, ImportRequest, JobRequestError};

#[test]
fn given_pascal_case_body_when_parsing_dump_then_fields_read() {
    let request: DumpRequest =
        serde_json::from_str(r#"{"Table": "users", "Start": 5, "Total": 100}"#).unwrap();

    assert_eq!(request.table, "users");
    assert_eq!(request.start, 5);
    assert_eq!(request.total, 100);
    assert_eq!(request.validate(), Ok(()));
}

#[test]
fn given_only_table_when_parsing_dump_then_window_defaults_to_zero() {
    let request: DumpRequest = serde_json::from_str(r#"{"Table": "users"}"#).unwrap();

    assert_eq!(request.start, 0);
    assert_eq!(request.total, 0);
}

#[test]
fn given_blank_table_when_validating_then_missing_table() {
    assert_eq!(
        DumpRequest::new("  ").validate(),
        Err(JobRequestError::MissingTable)
    );
    assert_eq!(
        ImportRequest::new("", "users.csv").validate(),
        Err(JobRequestError::MissingTable)
    );
}

#[test]
fn given_blank_file_when_validating_import_then_missing_file() {
    assert_eq!(
        ImportRequest::new("users", "").validate(),
        Err(JobRequestError::MissingFile)
    );
}

#[test]
fn given_lowercase_body_when_parsing_import_then_fields_read() {
    let request: ImportRequest =
        serde_json::from_str(r#"{"table": "users", "file": "users.csv"}"#).unwrap();

    assert_eq!(request, ImportRequest::new("users", "users.csv"));
}
