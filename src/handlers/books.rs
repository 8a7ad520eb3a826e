//! Book and chapter-list handlers.

use crate::error::AppError;
use crate::model::{Book, ChapterSummary};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let books = state.store.list_books().await?;
    Ok(Json(books))
}

/// Unknown tags answer 200 with a zero-valued book rather than 404.
pub async fn get_book(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Book>, AppError> {
    let book = state.store.find_book_by_tag(&tag).await?;
    if book.is_none() {
        tracing::debug!(%tag, "no book for tag");
    }
    Ok(Json(book.unwrap_or_default()))
}

pub async fn list_chapters(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Vec<ChapterSummary>>, AppError> {
    let chapters = state.store.list_chapters(&tag).await?;
    Ok(Json(chapters))
}
