use cb_server::{AppState, build_router, logger};

use cb_db::{SqliteCredentialStore, SqliteRecipeStore};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = cb_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database, with migrations applied
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = cb_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database ready");

    let jwt_secret: Vec<u8> = match config.auth.jwt_secret {
        Some(ref secret) => secret.as_bytes().to_vec(),
        None => {
            warn!("auth.jwt_secret not set; using a per-process secret, sessions end on restart");
            rand::random::<[u8; 32]>().to_vec()
        }
    };

    let rules = config.validation_rules();
    let credentials = SqliteCredentialStore::new(pool.clone(), &jwt_secret)
        .with_token_ttl(chrono::Duration::hours(config.auth.token_ttl_hours))
        .with_rules(rules);
    let recipes = SqliteRecipeStore::with_rules(pool.clone(), rules);

    let app_state = AppState {
        credentials: Arc::new(credentials),
        recipes: Arc::new(recipes),
        pool: pool.clone(),
    };

    let max_body_bytes = rules.max_request_bytes();
    info!("Request bodies capped at {} bytes", max_body_bytes);
    let app = build_router(app_state, config.server.max_connections, max_body_bytes);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual address matters when port is 0
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await
                }
            }
        })
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}
