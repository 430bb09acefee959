//! Prize entity model and DTOs.

use bonuses_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `prizes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prize {
    pub id: DbId,
    pub title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new prize.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrize {
    pub title: String,
}

/// DTO for updating a prize.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePrize {
    pub title: Option<String>,
}
