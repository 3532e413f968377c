use axum::response::{Html, IntoResponse};

/// Greeting served by the todo service.
pub const TODO_GREETING: &str = "<h1>Hello, From Todo😊!!</h1>";

/// Handler for `GET /todo`.
///
/// Always answers `200 OK` with a fixed HTML fragment; query parameters and
/// headers are ignored.
pub async fn todo_handler() -> impl IntoResponse {
    Html(TODO_GREETING)
}
