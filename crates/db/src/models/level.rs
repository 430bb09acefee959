//! Level entity model and DTOs.

use bonuses_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `levels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Level {
    pub id: DbId,
    pub title: String,
    /// Display and report ordering key. Not unique.
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new level. `sort_order` defaults to 0.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLevel {
    pub title: String,
    pub sort_order: Option<i32>,
}

/// DTO for updating a level. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLevel {
    pub title: Option<String>,
    pub sort_order: Option<i32>,
}
