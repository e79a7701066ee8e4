//! Session middleware.
//!
//! Every request passes through [`session_middleware`]; it never rejects. Routes
//! that need a role add [`require_admin`] (or call [`authorize`]) on top.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use auth_service_lib::UserSession;
use common::{AppError, AppResult};
use domain::{permits, UserRole, BEARER_TOKEN_PREFIX, SESSION_COOKIE};

use crate::state::AppState;

/// Signed-in user for the current request
///
/// `role` comes from the stored profile and is `None` when it could not be loaded.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: Option<UserRole>,
}

impl From<&UserSession> for CurrentUser {
    fn from(resolved: &UserSession) -> Self {
        Self {
            id: resolved.session.user.id,
            email: resolved.session.user.email.clone(),
            role: resolved.role(),
        }
    }
}

/// Session token from the `session_token` cookie, else a bearer header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Resolve the session, if any, into request extensions.
///
/// Inserts both the [`UserSession`] and a [`CurrentUser`]. Requests without a
/// valid session pass through untouched.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = session_token(request.headers()) {
        if let Some(resolved) = state.auth_service.resolve_session(&token).await {
            request.extensions_mut().insert(CurrentUser::from(&resolved));
            request.extensions_mut().insert(resolved);
        }
    }

    next.run(request).await
}

/// Check the current user against a required role.
///
/// No user is 401; a user whose role is not admitted, or who has no loaded
/// profile, is 403. The navigation gate applies the same rule.
pub fn authorize(user: Option<&CurrentUser>, required: UserRole) -> AppResult<()> {
    let user = user.ok_or(AppError::Unauthorized)?;
    if permits(user.role, Some(required)) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Route layer admitting admins only.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    authorize(request.extensions().get::<CurrentUser>(), UserRole::Admin)?;
    Ok(next.run(request).await)
}
