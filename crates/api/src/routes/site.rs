//! Root-level pages served outside the admin API.

use axum::routing::get;
use axum::Router;

use crate::handlers::{dashboard, report, site};
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET /                  -> welcome text
/// GET /download-report/  -> player level CSV (streamed)
/// GET /admin-dashboard/  -> summary counts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site::index))
        .route("/download-report/", get(report::download_report))
        .route("/admin-dashboard/", get(dashboard::admin_dashboard))
}
