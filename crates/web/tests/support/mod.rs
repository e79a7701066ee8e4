//! Mock services and request helpers shared by the API tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use auth_service_lib::service::AuthService;
use auth_service_lib::{Session, SessionUser, SignedSession, UserSession};
use common::types::Paginated;
use common::{AppError, AppResult};
use domain::{
    CalendarEvent, CalendarStatus, FilterParams, Tag, UserProfile, UserRole, UserStatus, Villa,
    VillaDetail, VillaImage,
};
use villa_service_lib::infra::RpcError;
use villa_service_lib::service::{TagMaintenance, VillaCatalog};
use web_lib::routes::create_router;
use web_lib::state::{AppState, DatabaseProbe};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const CUSTOMER_TOKEN: &str = "customer-token";
/// Valid token whose profile cannot be loaded
pub const ORPHAN_TOKEN: &str = "orphan-token";
/// Admin token whose profile cannot be loaded
pub const ORPHAN_ADMIN_TOKEN: &str = "orphan-admin-token";

pub fn known_villa_id() -> Uuid {
    Uuid::from_u128(0x5eed)
}

fn expires() -> DateTime<Utc> {
    Utc::now() + Duration::hours(1)
}

fn session(role: UserRole, email: &str) -> Session {
    Session {
        user: SessionUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: Some("Test User".to_string()),
            role,
        },
        expires: expires(),
    }
}

fn profile_for(session: &Session) -> UserProfile {
    let mut profile = UserProfile::new(session.user.id, session.user.email.clone());
    profile.name = session.user.name.clone();
    profile.role = session.user.role;
    profile.status = UserStatus::Active;
    profile
}

fn session_for(token: &str) -> Option<Session> {
    match token {
        ADMIN_TOKEN | ORPHAN_ADMIN_TOKEN => Some(session(UserRole::Admin, "admin@example.com")),
        CUSTOMER_TOKEN | ORPHAN_TOKEN => Some(session(UserRole::Customer, "ana@example.com")),
        _ => None,
    }
}

// =============================================================================
// Mock Services
// =============================================================================

/// Auth service that recognises a fixed set of tokens and one account
pub struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<SignedSession> {
        match (email, password) {
            ("ana@example.com", "correct horse") => Ok(SignedSession {
                token: CUSTOMER_TOKEN.to_string(),
                session: session(UserRole::Customer, email),
                expires_in: 3600,
            }),
            ("banned@example.com", _) => Err(AppError::Forbidden),
            _ => Err(AppError::InvalidCredentials),
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Session> {
        session_for(token).ok_or(AppError::Unauthorized)
    }

    async fn resolve_session(&self, token: &str) -> Option<UserSession> {
        let session = session_for(token)?;
        let orphaned = token == ORPHAN_TOKEN || token == ORPHAN_ADMIN_TOKEN;
        let profile = (!orphaned).then(|| profile_for(&session));
        Some(UserSession { session, profile })
    }
}

fn villa(id: Uuid) -> Villa {
    let now = Utc::now();
    Villa {
        id,
        name: "Casa Azul".to_string(),
        description: Some("Sea-facing villa".to_string()),
        region: "Algarve".to_string(),
        address: None,
        max_guests: 6,
        bedrooms: 3,
        bathrooms: 2,
        price_per_night: 310.0,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// Catalog holding a single villa
pub struct MockCatalog;

#[async_trait]
impl VillaCatalog for MockCatalog {
    async fn search_villas(&self, params: FilterParams) -> AppResult<Paginated<Villa>> {
        params.validate()?;
        Ok(Paginated::new(
            vec![villa(known_villa_id())],
            params.page(),
            params.limit(),
            1,
        ))
    }

    async fn get_villa(&self, id: Uuid) -> AppResult<VillaDetail> {
        if id != known_villa_id() {
            return Err(AppError::NotFound);
        }
        let images = vec![
            VillaImage {
                id: Uuid::new_v4(),
                villa_id: id,
                url: "https://cdn.example.com/2.jpg".to_string(),
                alt: None,
                sort_order: 2,
                is_cover_image: true,
            },
            VillaImage {
                id: Uuid::new_v4(),
                villa_id: id,
                url: "https://cdn.example.com/1.jpg".to_string(),
                alt: Some("Pool".to_string()),
                sort_order: 1,
                is_cover_image: false,
            },
        ];
        let tags = vec![Tag {
            id: Uuid::new_v4(),
            name: "pool".to_string(),
            created_at: Utc::now(),
        }];
        Ok(VillaDetail::new(villa(id), images, tags))
    }

    async fn calendar(
        &self,
        villa_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<CalendarEvent>> {
        if to < from {
            return Err(AppError::validation("to must not be before from"));
        }
        let now = Utc::now();
        Ok(vec![CalendarEvent {
            id: Uuid::new_v4(),
            villa_id,
            date: from,
            status: CalendarStatus::Reserved,
            price: None,
            note: None,
            event_type: None,
            reservation_id: None,
            created_at: now,
            updated_at: now,
        }])
    }
}

/// How the tag procedure should behave
#[derive(Clone)]
pub enum TagOutcome {
    Succeeds,
    Reports(&'static str),
    Unreachable,
}

pub struct MockTags {
    outcome: TagOutcome,
    pub calls: Arc<AtomicUsize>,
}

#[async_trait]
impl TagMaintenance for MockTags {
    async fn update_villa_tags(&self) -> Result<(), RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            TagOutcome::Succeeds => Ok(()),
            TagOutcome::Reports(message) => Err(RpcError::Upstream {
                status: 400,
                message: message.to_string(),
                details: None,
                hint: None,
                code: Some("P0001".to_string()),
            }),
            TagOutcome::Unreachable => Err(RpcError::Decode("connection closed".to_string())),
        }
    }
}

pub struct MockProbe {
    healthy: bool,
}

#[async_trait]
impl DatabaseProbe for MockProbe {
    async fn ping(&self) -> Result<(), String> {
        if self.healthy {
            Ok(())
        } else {
            Err("connection refused".to_string())
        }
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

pub struct TestApp {
    pub router: Router,
    pub tag_calls: Arc<AtomicUsize>,
}

pub fn app_with(tags: TagOutcome, healthy: bool) -> TestApp {
    let calls = Arc::new(AtomicUsize::new(0));
    let state = AppState::new(
        Arc::new(MockAuthService),
        Arc::new(MockCatalog),
        Arc::new(MockTags {
            outcome: tags,
            calls: calls.clone(),
        }),
        Arc::new(MockProbe { healthy }),
    );

    TestApp {
        router: create_router(state),
        tag_calls: calls,
    }
}

pub fn app() -> TestApp {
    app_with(TagOutcome::Succeeds, true)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn with_bearer(mut request: Request<Body>, token: &str) -> Request<Body> {
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );
    request
}

pub fn with_cookie(mut request: Request<Body>, cookie: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert(header::COOKIE, cookie.parse().unwrap());
    request
}
