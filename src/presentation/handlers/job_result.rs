use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Acknowledgement for an accepted job. It says nothing about whether the
/// job will succeed; that is polled through `/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobResult {
    pub table: String,
    pub message: String,
    pub file_name: String,
}

/// Plain-text 400 carrying the parse or validation error.
pub(super) fn bad_request(error: impl ToString) -> Response {
    (StatusCode::BAD_REQUEST, error.to_string()).into_response()
}

/// Parses a request body, matching top-level field names case-insensitively
/// (`TABLE`, `Table` and `table` are the same field).
pub(super) fn parse_request<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    let fields: Map<String, Value> = serde_json::from_slice(body)?;
    let fields: Map<String, Value> = fields
        .into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect();
    serde_json::from_value(Value::Object(fields))
}
