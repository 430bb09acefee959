//! Handler for the player level CSV download.

use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use bonuses_core::report::{REPORT_CONTENT_DISPOSITION, REPORT_CONTENT_TYPE};

use crate::error::AppResult;
use crate::report::export_player_levels;
use crate::state::AppState;

/// GET /download-report/
///
/// Streams the report as a CSV attachment.
pub async fn download_report(State(state): State<AppState>) -> AppResult<Response> {
    let stream = export_player_levels(&state.pool, state.config.report_batch_size).await?;
    tracing::info!("Streaming player level report");

    Ok((
        [
            (header::CONTENT_TYPE, REPORT_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, REPORT_CONTENT_DISPOSITION),
        ],
        Body::from_stream(stream),
    )
        .into_response())
}
