//! Villa Web Library
//!
//! HTTP API for the villa rental site: sign-in and sessions, the villa
//! catalog, role-aware navigation and the admin tag update.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod nav;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use auth_service_lib::config::AuthServiceConfig;
use villa_service_lib::infra::{Database, SupabaseClient};
use villa_service_lib::service::TagUpdater;

use crate::config::WebConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect to the database and wire every service into the app state.
pub async fn build_state(config: &WebConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database.url).await?;

    let auth_service = auth_service_lib::authenticator(
        Arc::new(villa_service_lib::profiles(&db)),
        AuthServiceConfig::from(config.session.clone()),
    );
    let catalog = villa_service_lib::catalog(&db);
    let tags = TagUpdater::new(Arc::new(SupabaseClient::new(config.supabase.clone())));

    Ok(AppState::new(
        Arc::new(auth_service),
        Arc::new(catalog),
        Arc::new(tags),
        Arc::new(db),
    ))
}

/// Run the HTTP server until it fails.
pub async fn run(config: WebConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(service = %config.service.service_name, "Starting");

    let state = build_state(&config).await?;
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
