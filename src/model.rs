//! Dataset rows and the JSON projections served by the API.

use serde::Serialize;

/// A book of the dataset. A missing book is served as `Book::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Book {
    pub bid: i64,
    pub number: i64,
    pub short: String,
    pub long: String,
    pub alt: String,
    pub tag: String,
    pub blurb: String,
    pub testament: String,
    pub edition: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub cid: i64,
    pub number: i64,
    /// Owning book (`Book::bid`).
    pub book: i64,
    pub header: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub vid: i64,
    pub number: i64,
    pub book: i64,
    /// Owning chapter (`Chapter::cid`), not the chapter number.
    pub chapter: i64,
    pub latin: String,
    pub english: String,
    pub commentary: Option<String>,
}

/// One entry of `GET /books/{tag}/chapters`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub number: i64,
    pub book_long: String,
    pub header: String,
}

/// One entry of `GET /books/{tag}/{chapter}/{verse}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VerseText {
    pub book_long: String,
    pub chapter: i64,
    pub latin: String,
    pub english: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceMeta {
    #[serde(rename = "aboutAPI")]
    pub about_api: &'static str,
    pub about: &'static str,
    pub contact: &'static str,
}

pub const SERVICE_META: ServiceMeta = ServiceMeta {
    about_api: "API for the Vulgate/Douay-Rheims Bible",
    about: "The Vulgate is a version of the Bible",
    contact: "bohemdev@tutanota.com",
};
