//! Navigation handler.

use axum::{extract::Query, response::Json, routing::get, Extension, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use auth_service_lib::UserSession;

use crate::nav::{render_site_links, RenderedLink};
use crate::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NavQuery {
    /// Path of the page being rendered
    pub path: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NavResponse {
    pub links: Vec<RenderedLink>,
}

pub fn nav_routes() -> Router<AppState> {
    Router::new().route("/", get(get_nav))
}

/// Navigation links visible to the current visitor
#[utoipa::path(
    get,
    path = "/api/nav",
    tag = "Navigation",
    params(NavQuery),
    responses(
        (status = 200, description = "Visible links", body = NavResponse)
    )
)]
pub async fn get_nav(
    session: Option<Extension<UserSession>>,
    Query(query): Query<NavQuery>,
) -> Json<NavResponse> {
    let profile = session.as_ref().and_then(|Extension(s)| s.profile.as_ref());
    let path = query.path.as_deref().unwrap_or("/");

    Json(NavResponse {
        links: render_site_links(profile, path),
    })
}
