use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use meeple_api::{AppStateInner, router};
use meeple_db::{Database, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meeple=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let db_path = std::env::var("MEEPLE_DB_PATH").unwrap_or_else(|_| "meeple.db".into());
    let host = std::env::var("MEEPLE_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("MEEPLE_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // Init database
    let db = Database::open(&PathBuf::from(&db_path))?;
    if std::env::var("MEEPLE_SEED_DEMO").is_ok() {
        db.with_conn(|conn| seed::load_sample_data(conn))?;
        info!("Demo dataset loaded into {}", db_path);
    }

    // Shared state
    let state = Arc::new(AppStateInner { db });

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Meeple server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
