//! Root-level static pages.

/// Greeting returned by the index page.
pub const WELCOME_TEXT: &str = "Добро пожаловать в систему бонусов!";

/// GET /
pub async fn index() -> &'static str {
    WELCOME_TEXT
}
