//! Verse lookup and the chapter-content stub.

use crate::error::AppError;
use crate::model::VerseText;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub const CHAPTER_CONTENT_PLACEHOLDER: &str = "Chapter content.";

/// Chapter and verse segments are ordinals; anything that is not a plain integer matches nothing.
fn parse_ordinal(segment: &str) -> Option<i64> {
    segment.parse().ok()
}

pub async fn get_verse(
    State(state): State<AppState>,
    Path((tag, chapter, verse)): Path<(String, String, String)>,
) -> Result<Json<Vec<VerseText>>, AppError> {
    let (Some(chapter), Some(verse)) = (parse_ordinal(&chapter), parse_ordinal(&verse)) else {
        tracing::debug!(%tag, %chapter, %verse, "non-numeric verse reference");
        return Ok(Json(Vec::new()));
    };
    let rows = state.store.find_verse(&tag, chapter, verse).await?;
    Ok(Json(rows))
}

/// Full chapter text is not served yet.
pub async fn chapter_content(Path((_tag, _chapter)): Path<(String, String)>) -> (StatusCode, &'static str) {
    (StatusCode::NOT_IMPLEMENTED, CHAPTER_CONTENT_PLACEHOLDER)
}
