//! JSON envelope shared by the admin API and the dashboard.
//!
//! Every JSON body is `{ "data": ... }`; errors use `{ "error", "code" }`
//! instead (see [`crate::error`]).

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok((StatusCode::CREATED, Json(DataResponse { data: player })))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
