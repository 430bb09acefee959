use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bonuses_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bonuses_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx that is not a known constraint violation.
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for a [`CoreError::NotFound`].
    pub fn not_found(entity: &'static str, id: bonuses_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// PostgreSQL SQLSTATE codes we map to client errors.
const PG_UNIQUE_VIOLATION: &str = "23505";
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";
const PG_CHECK_VIOLATION: &str = "23514";

/// Translate constraint violations into client errors:
///
/// - Unique violations on a `uq_` constraint become [`CoreError::Conflict`] (409).
/// - Foreign key violations become [`AppError::BadRequest`] (400): the
///   referenced row does not exist.
/// - Check violations become [`CoreError::Validation`] (400).
///
/// Anything else stays [`AppError::Database`].
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some(PG_UNIQUE_VIOLATION) if constraint.starts_with("uq_") => {
                    return AppError::Core(CoreError::Conflict(format!(
                        "Duplicate value violates unique constraint: {constraint}"
                    )));
                }
                Some(PG_FOREIGN_KEY_VIOLATION) => {
                    return AppError::BadRequest(format!(
                        "Referenced record does not exist: {constraint}"
                    ));
                }
                Some(PG_CHECK_VIOLATION) => {
                    return AppError::Core(CoreError::Validation(format!(
                        "Value violates check constraint: {constraint}"
                    )));
                }
                _ => {}
            }
        }
        AppError::Database(err)
    }
}

/// Classify a database error that is not a known constraint violation.
///
/// `RowNotFound` maps to 404; everything else maps to 500 with a sanitized
/// message.
pub fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
