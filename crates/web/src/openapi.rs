//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::auth_handler::{
    SessionResponse, SessionUserResponse, SignInRequest, SignInResponse,
};
use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use crate::handlers::nav_handler::NavResponse;
use crate::handlers::villa_handler::{
    TagUpdateErrorBody, TagUpdateResponse, VillaSearchResponse,
};
use crate::nav::RenderedLink;
use common::types::{MessageResponse, PaginationMeta};
use domain::{
    ActiveFilter, CalendarEvent, CalendarEventType, CalendarStatus, NotificationPreferences, Tag,
    UserProfileResponse, UserRole, UserStatus, Villa, VillaDetail, VillaImage,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::sign_in,
        crate::handlers::auth_handler::get_session,
        crate::handlers::auth_handler::logout,
        crate::handlers::villa_handler::list_villas,
        crate::handlers::villa_handler::get_villa,
        crate::handlers::villa_handler::get_calendar,
        crate::handlers::villa_handler::update_tags,
        crate::handlers::nav_handler::get_nav,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            SignInRequest,
            SignInResponse,
            SessionResponse,
            SessionUserResponse,
            MessageResponse,
            UserProfileResponse,
            NotificationPreferences,
            UserRole,
            UserStatus,
            Villa,
            VillaDetail,
            VillaImage,
            Tag,
            CalendarEvent,
            CalendarStatus,
            CalendarEventType,
            ActiveFilter,
            PaginationMeta,
            VillaSearchResponse,
            TagUpdateResponse,
            TagUpdateErrorBody,
            RenderedLink,
            NavResponse,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Sign-in, session and logout"),
        (name = "Villas", description = "Villa catalog and calendar"),
        (name = "Navigation", description = "Role-aware site navigation"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
