//! HTTP interface - routing, page handlers, and the read-only JSON API.

/// Read-only JSON endpoints consumed by the admin dashboard
pub mod api;
/// Marketing pages and the contact form
pub mod pages;

use crate::errors::Result;
use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Shared state handed to every handler. `DatabaseConnection` is already
/// reference-counted, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Live database handle
    pub db: DatabaseConnection,
}

/// Assemble the full route table.
///
/// CORS is wide open, same as the site has always run: the pages are public
/// and the API is read-only.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::inicio))
        .route("/programas/beca18", get(pages::beca18))
        .route("/programas/preuniversitario", get(pages::preuniversitario))
        .route("/programas/matematicas", get(pages::matematicas))
        .route("/programas/ciencias", get(pages::ciencias))
        .route("/horarios", get(pages::horarios))
        .route("/inscripciones", get(pages::inscripciones))
        .route("/nosotros", get(pages::nosotros))
        .route(
            "/contacto",
            get(pages::contacto).post(pages::contacto_enviar),
        )
        .route("/api/programas", get(api::programas))
        .route("/api/contactos", get(api::contactos))
        .layer(cors)
        .with_state(state)
}

/// Bind the listener and serve until the process is stopped.
pub async fn serve(listen_addr: &str, state: AppState) -> Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
