use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::JobResult;
use super::job_result::{bad_request, parse_request};
use crate::domain::DumpRequest;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, body))]
pub async fn dump_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request: DumpRequest = match parse_request(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed dump request");
            return bad_request(e);
        }
    };

    if let Err(e) = request.validate() {
        tracing::warn!(error = %e, "Rejected dump request");
        return bad_request(e);
    }

    let file_name = state.dispatcher.dispatch_dump(&request);

    (
        StatusCode::OK,
        Json(JobResult {
            table: request.table,
            message: "Table will be dumped".to_string(),
            file_name,
        }),
    )
        .into_response()
}
