//! Server entrypoint: configuration, database bootstrap, catalog seeding,
//! then the HTTP listener.

use dotenvy::dotenv;
use euler_web::config::{AppConfig, database};
use euler_web::core::programa;
use euler_web::errors::Result;
use euler_web::web::{self, AppState};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env first: RUST_LOG may live there, and dotenvy never
    //    overrides variables already set in the process environment
    dotenv().ok();

    // 2. Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 3. Load the application configuration
    let app_config = AppConfig::from_env()?;
    info!(dev_mode = app_config.dev_mode, "Configuration loaded");
    if app_config.secret_is_default() {
        warn!("SECRET_KEY is the development default; set a real value in production");
    }

    // 4. Connect to the database
    let db = database::connect(&app_config.database_url)
        .await
        .inspect(|_| info!("Database initialized successfully"))
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;

    // 5. Schema and catalog are best effort: on failure the site still comes
    //    up and serves against whatever state the database is in.
    match database::create_tables(&db).await {
        Ok(()) => {
            if let Err(e) = programa::seed_programas_iniciales(&db).await {
                warn!("Failed to seed the initial program catalog: {e}");
            }
        }
        Err(e) => warn!("Failed to create tables: {e}"),
    }

    // 6. Serve until stopped
    web::serve(&app_config.listen_addr, AppState { db }).await?;

    Ok(())
}
