//! SQLite-backed store: pool setup, table bootstrap, and the read queries behind every route.

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::model::{Book, ChapterSummary, VerseText};
use crate::repository::{BookRepository, Store, VerseRepository};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Dataset tables. `verses.chapter` references `chapters.cid`; chapter and verse numbers are ordinals.
const TABLES_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS editions (
        eid INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        date TEXT,
        info TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS books (
        bid INTEGER PRIMARY KEY,
        number INTEGER NOT NULL,
        short TEXT NOT NULL,
        long TEXT NOT NULL,
        alt TEXT,
        tag TEXT NOT NULL UNIQUE,
        blurb TEXT,
        testament TEXT NOT NULL,
        edition TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS chapters (
        cid INTEGER PRIMARY KEY,
        number INTEGER NOT NULL,
        book INTEGER NOT NULL REFERENCES books (bid),
        header TEXT,
        UNIQUE (book, number)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS verses (
        vid INTEGER PRIMARY KEY,
        number INTEGER NOT NULL,
        book INTEGER NOT NULL REFERENCES books (bid),
        chapter INTEGER NOT NULL REFERENCES chapters (cid),
        latin TEXT NOT NULL,
        english TEXT NOT NULL,
        commentary TEXT,
        UNIQUE (chapter, number)
    )
    "#,
];

const SELECT_BOOK_COLUMNS: &str = "SELECT bid, number, short, long, COALESCE(alt, '') AS alt, tag, \
     COALESCE(blurb, '') AS blurb, COALESCE(testament, '') AS testament, \
     COALESCE(CAST(edition AS TEXT), '') AS edition FROM books";

const SELECT_CHAPTERS_BY_TAG: &str = r#"
    SELECT chapters.number AS number, books.long AS book_long, COALESCE(chapters.header, '') AS header
    FROM chapters
    JOIN books ON books.bid = chapters.book
    WHERE books.tag = ?1
    ORDER BY chapters.number, chapters.cid
"#;

const SELECT_VERSE: &str = r#"
    SELECT books.long AS book_long, chapters.number AS chapter, verses.latin AS latin, verses.english AS english
    FROM verses
    JOIN books ON books.bid = verses.book
    JOIN chapters ON chapters.cid = verses.chapter AND chapters.book = books.bid
    WHERE books.tag = ?1 AND chapters.number = ?2 AND verses.number = ?3
    ORDER BY verses.vid
"#;

/// Open the dataset pool. The file must exist unless `init_schema` is set, in which case it is
/// created along with any missing tables; otherwise connections are read-only.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(config.init_schema)
        .read_only(!config.init_schema)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    if config.init_schema {
        ensure_tables(&pool).await?;
    }
    tracing::info!(
        database_url = %config.database_url,
        read_only = !config.init_schema,
        "dataset store opened"
    );
    Ok(pool)
}

/// Create the dataset tables if they do not exist. Never touches rows.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in TABLES_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteStore { pool }
    }
}

#[async_trait]
impl BookRepository for SqliteStore {
    async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        let sql = format!("{} ORDER BY bid", SELECT_BOOK_COLUMNS);
        let books = sqlx::query_as::<_, Book>(&sql).fetch_all(&self.pool).await?;
        Ok(books)
    }

    async fn find_book_by_tag(&self, tag: &str) -> Result<Option<Book>, AppError> {
        let sql = format!("{} WHERE tag = ?1", SELECT_BOOK_COLUMNS);
        let book = sqlx::query_as::<_, Book>(&sql)
            .bind(tag)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    async fn list_chapters(&self, tag: &str) -> Result<Vec<ChapterSummary>, AppError> {
        let rows = sqlx::query_as::<_, ChapterSummary>(SELECT_CHAPTERS_BY_TAG)
            .bind(tag)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl VerseRepository for SqliteStore {
    async fn find_verse(&self, tag: &str, chapter: i64, verse: i64) -> Result<Vec<VerseText>, AppError> {
        let rows = sqlx::query_as::<_, VerseText>(SELECT_VERSE)
            .bind(tag)
            .bind(chapter)
            .bind(verse)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
