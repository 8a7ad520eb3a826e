//! Vulgate API: read-only JSON API over the Vulgate/Douay-Rheims dataset.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{load as load_config, ServerConfig};
pub use error::{AppError, ConfigError};
pub use model::{Book, Chapter, ChapterSummary, ServiceMeta, Verse, VerseText};
pub use repository::{BookRepository, MemoryStore, Store, VerseRepository};
pub use routes::{api_routes, app, common_routes_with_ready};
pub use state::AppState;
pub use store::{connect, ensure_tables, SqliteStore};
