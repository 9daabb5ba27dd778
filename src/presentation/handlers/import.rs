use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::JobResult;
use super::job_result::{bad_request, parse_request};
use crate::domain::ImportRequest;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, body))]
pub async fn import_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request: ImportRequest = match parse_request(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed import request");
            return bad_request(e);
        }
    };

    if let Err(e) = request.validate() {
        tracing::warn!(error = %e, "Rejected import request");
        return bad_request(e);
    }

    state.dispatcher.dispatch_import(&request);

    (
        StatusCode::OK,
        Json(JobResult {
            table: request.table,
            message: "Table will be imported".to_string(),
            file_name: request.file,
        }),
    )
        .into_response()
}
