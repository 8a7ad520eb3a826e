//! Read-only dataset routes. `/books/:tag/chapters` takes precedence over `/books/:tag/:chapter`.

use crate::handlers::{chapter_content, get_book, get_verse, list_books, list_chapters, service_meta};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_meta))
        .route("/books", get(list_books))
        .route("/books/:tag", get(get_book))
        .route("/books/:tag/chapters", get(list_chapters))
        .route("/books/:tag/:chapter", get(chapter_content))
        .route("/books/:tag/:chapter/:verse", get(get_verse))
        .with_state(state)
}
