//! In-memory store with the same join semantics as the SQLite queries.

use super::{BookRepository, Store, VerseRepository};
use crate::error::AppError;
use crate::model::{Book, Chapter, ChapterSummary, Verse, VerseText};
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    books: Vec<Book>,
    chapters: Vec<Chapter>,
    verses: Vec<Verse>,
}

impl MemoryStore {
    pub fn new(books: Vec<Book>, chapters: Vec<Chapter>, verses: Vec<Verse>) -> Self {
        MemoryStore { books, chapters, verses }
    }

    fn book_by_tag(&self, tag: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.tag == tag)
    }
}

#[async_trait]
impl BookRepository for MemoryStore {
    async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        let mut books = self.books.clone();
        books.sort_by_key(|b| b.bid);
        Ok(books)
    }

    async fn find_book_by_tag(&self, tag: &str) -> Result<Option<Book>, AppError> {
        Ok(self.book_by_tag(tag).cloned())
    }

    async fn list_chapters(&self, tag: &str) -> Result<Vec<ChapterSummary>, AppError> {
        let Some(book) = self.book_by_tag(tag) else {
            return Ok(Vec::new());
        };
        let mut chapters: Vec<&Chapter> = self.chapters.iter().filter(|c| c.book == book.bid).collect();
        chapters.sort_by_key(|c| (c.number, c.cid));
        Ok(chapters
            .into_iter()
            .map(|c| ChapterSummary {
                number: c.number,
                book_long: book.long.clone(),
                header: c.header.clone().unwrap_or_default(),
            })
            .collect())
    }
}

#[async_trait]
impl VerseRepository for MemoryStore {
    async fn find_verse(&self, tag: &str, chapter: i64, verse: i64) -> Result<Vec<VerseText>, AppError> {
        let Some(book) = self.book_by_tag(tag) else {
            return Ok(Vec::new());
        };
        let chapter_ids: Vec<i64> = self
            .chapters
            .iter()
            .filter(|c| c.book == book.bid && c.number == chapter)
            .map(|c| c.cid)
            .collect();
        let mut hits: Vec<&Verse> = self
            .verses
            .iter()
            .filter(|v| v.book == book.bid && v.number == verse && chapter_ids.contains(&v.chapter))
            .collect();
        hits.sort_by_key(|v| v.vid);
        Ok(hits
            .into_iter()
            .map(|v| VerseText {
                book_long: book.long.clone(),
                chapter,
                latin: v.latin.clone(),
                english: v.english.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
