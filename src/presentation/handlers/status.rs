use axum::Json;
use axum::extract::State;

use crate::application::services::StatusReport;
use crate::presentation::state::AppState;

pub async fn status_handler(State(state): State<AppState>) -> Json<StatusReport> {
    Json(state.reporter.report())
}
