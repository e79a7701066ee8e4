//! Authentication handlers.

use axum::{extract::State, response::Json, routing::{get, post}, Extension, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use auth_service_lib::{Session, UserSession};
use common::types::MessageResponse;
use common::AppResult;
use domain::{UserProfileResponse, UserRole, AUTH_TOKEN_COOKIE, SESSION_COOKIE};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Sign-in request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignInRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "guest@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Identity carried by the session
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionUserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
}

/// Current session with the stored profile when available
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub user: SessionUserResponse,
    pub expires: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfileResponse>,
}

impl SessionResponse {
    fn new(session: Session, profile: Option<UserProfileResponse>) -> Self {
        Self {
            user: SessionUserResponse {
                id: session.user.id,
                email: session.user.email,
                name: session.user.name,
                role: session.user.role,
            },
            expires: session.expires,
            profile,
        }
    }
}

impl From<UserSession> for SessionResponse {
    fn from(resolved: UserSession) -> Self {
        Self::new(
            resolved.session,
            resolved.profile.map(UserProfileResponse::from),
        )
    }
}

/// Sign-in result; the token is also set as the session cookie
#[derive(Debug, Serialize, ToSchema)]
pub struct SignInResponse {
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: i64,
    pub session: SessionResponse,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signin", post(sign_in))
        .route("/session", get(get_session))
        .route("/logout", post(logout))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = "Authentication",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = SignInResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account is not active")
    )
)]
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<SignInRequest>,
) -> AppResult<(CookieJar, Json<SignInResponse>)> {
    let signed = state
        .auth_service
        .sign_in(&payload.email, &payload.password)
        .await?;

    let cookie = Cookie::build((SESSION_COOKIE, signed.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(signed.expires_in));

    let response = SignInResponse {
        access_token: signed.token,
        token_type: "Bearer".to_string(),
        expires_in: signed.expires_in,
        session: SessionResponse::new(signed.session, None),
    };

    Ok((jar.add(cookie), Json(response)))
}

/// Read the current session
///
/// Returns `{}` when there is no valid session.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "Authentication",
    responses(
        (status = 200, description = "Current session, or an empty object", body = SessionResponse)
    )
)]
pub async fn get_session(session: Option<Extension<UserSession>>) -> Json<serde_json::Value> {
    match session {
        Some(Extension(resolved)) => Json(
            serde_json::to_value(SessionResponse::from(resolved))
                .unwrap_or_else(|_| serde_json::json!({})),
        ),
        None => Json(serde_json::json!({})),
    }
}

/// An empty cookie that expired at the Unix epoch
fn expired(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}

/// Log out by expiring the session cookies
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar
        .add(expired(AUTH_TOKEN_COOKIE))
        .add(expired(SESSION_COOKIE));

    (jar, Json(MessageResponse::new("Logged out successfully")))
}
