//! Read-only capability interfaces over the dataset. Handlers depend on these only.

mod memory;
pub use memory::MemoryStore;

use crate::error::AppError;
use crate::model::{Book, ChapterSummary, VerseText};
use async_trait::async_trait;

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Every book, in store order.
    async fn list_books(&self) -> Result<Vec<Book>, AppError>;

    /// The book whose tag equals `tag` exactly (case-sensitive).
    async fn find_book_by_tag(&self, tag: &str) -> Result<Option<Book>, AppError>;

    /// Chapters of the book tagged `tag`, ordered by chapter number. Empty when the tag is unknown.
    async fn list_chapters(&self, tag: &str) -> Result<Vec<ChapterSummary>, AppError>;
}

#[async_trait]
pub trait VerseRepository: Send + Sync {
    /// Verse `verse` of chapter `chapter` (both ordinals) in the book tagged `tag`.
    async fn find_verse(&self, tag: &str, chapter: i64, verse: i64) -> Result<Vec<VerseText>, AppError>;
}

/// Everything the HTTP layer needs from a backing store.
#[async_trait]
pub trait Store: BookRepository + VerseRepository {
    /// Cheap round-trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
