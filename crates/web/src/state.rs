//! Application state for dependency injection.

use std::sync::Arc;

use async_trait::async_trait;

use auth_service_lib::service::AuthService;
use villa_service_lib::infra::Database;
use villa_service_lib::service::{TagMaintenance, VillaCatalog};

/// Connectivity check used by the health endpoint.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn ping(&self) -> Result<(), String>;
}

#[async_trait]
impl DatabaseProbe for Database {
    async fn ping(&self) -> Result<(), String> {
        Database::ping(self).await.map_err(|e| e.to_string())
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub catalog: Arc<dyn VillaCatalog>,
    pub tags: Arc<dyn TagMaintenance>,
    pub database: Arc<dyn DatabaseProbe>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        catalog: Arc<dyn VillaCatalog>,
        tags: Arc<dyn TagMaintenance>,
        database: Arc<dyn DatabaseProbe>,
    ) -> Self {
        Self {
            auth_service,
            catalog,
            tags,
            database,
        }
    }
}
