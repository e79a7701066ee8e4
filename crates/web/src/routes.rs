//! Route configuration.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{auth_routes, health_routes, nav_routes, villa_admin_routes, villa_routes};
use crate::middleware::{require_admin, session_middleware};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
///
/// The session is resolved for every request; the tag update route also
/// requires an admin.
pub fn create_router(state: AppState) -> Router {
    let villas = villa_routes()
        .merge(villa_admin_routes().route_layer(middleware::from_fn(require_admin)));

    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/auth", auth_routes())
        .nest("/api/villas", villas)
        .nest("/api/nav", nav_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .with_state(state)
}
