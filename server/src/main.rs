//! Vulgate API server: reads config from the environment, opens the dataset, serves HTTP.
//!
//! Run from repo root: `cargo run -p vulgate-server`

use tokio::net::TcpListener;
use vulgate_api::{app, connect, load_config, AppState, SqliteStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("vulgate_api=info,vulgate_server=info,tower_http=info")
            }),
        )
        .init();

    let config = load_config()?;
    let pool = connect(&config).await?;
    let state = AppState::new(SqliteStore::new(pool));

    let listener = TcpListener::bind(config.bind_addr.as_str()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
