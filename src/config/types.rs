//! Settings the server needs to open the dataset and listen.

pub const DEFAULT_DATABASE_URL: &str = "sqlite://v.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite connection string for the dataset file.
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    /// Create missing tables (and the database file) at startup. When false the store is opened read-only.
    pub init_schema: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            init_schema: false,
        }
    }
}
