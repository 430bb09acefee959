//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Free-text search (`?search=`), used by the player and prize listings.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

impl SearchParams {
    /// The search term, or `None` if absent or blank.
    pub fn term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
