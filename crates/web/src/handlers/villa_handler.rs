//! Villa handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use common::types::PaginationMeta;
use common::{AppError, AppResult};
use domain::{
    ActiveFilter, CalendarEvent, FilterParams, Villa, VillaDetail, DEFAULT_CALENDAR_WINDOW_DAYS,
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
use villa_service_lib::infra::RpcError;

use crate::extractors::ValidatedQuery;
use crate::state::AppState;

/// Villa listing filters
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VillaQuery {
    /// First night (YYYY-MM-DD)
    pub check_in: Option<NaiveDate>,
    /// Departure day (YYYY-MM-DD), exclusive
    pub check_out: Option<NaiveDate>,
    #[validate(range(min = 1, message = "guests must be at least 1"))]
    pub guests: Option<u32>,
    pub region: Option<String>,
    /// Comma-separated tag names; a villa must carry all of them
    pub tags: Option<String>,
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: Option<u64>,
}

impl VillaQuery {
    pub fn into_filter(self) -> FilterParams {
        let tags = self
            .tags
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        FilterParams {
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            region: self.region,
            tags,
            page: self.page.unwrap_or(DEFAULT_PAGE_NUMBER),
            per_page: self.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
        }
    }
}

/// Calendar range; both ends inclusive
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalendarQuery {
    /// Defaults to today
    pub from: Option<NaiveDate>,
    /// Defaults to 90 days after `from`
    pub to: Option<NaiveDate>,
}

impl CalendarQuery {
    /// Resolve the range. Fails when the default end would fall past the
    /// last representable date.
    pub fn range(&self, today: NaiveDate) -> AppResult<(NaiveDate, NaiveDate)> {
        let from = self.from.unwrap_or(today);
        let to = match self.to {
            Some(to) => to,
            None => from
                .checked_add_days(Days::new(DEFAULT_CALENDAR_WINDOW_DAYS))
                .ok_or_else(|| AppError::validation("from is too far in the future"))?,
        };
        Ok((from, to))
    }
}

/// One page of villas with the filters that produced it
#[derive(Debug, Serialize, ToSchema)]
pub struct VillaSearchResponse {
    pub data: Vec<Villa>,
    pub meta: PaginationMeta,
    pub active_filters: Vec<ActiveFilter>,
}

/// Successful bulk tag update
#[derive(Debug, Serialize, ToSchema)]
pub struct TagUpdateResponse {
    pub success: bool,
    #[schema(example = "Villa tags updated successfully")]
    pub message: String,
}

/// Failed bulk tag update
#[derive(Debug, Serialize, ToSchema)]
pub struct TagUpdateErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Tag update failures keep their own response shape.
#[derive(Debug)]
pub struct TagUpdateError(RpcError);

impl IntoResponse for TagUpdateError {
    fn into_response(self) -> Response {
        let body = match self.0.upstream_message() {
            Some(message) => {
                tracing::error!(error = ?self.0, "update_villa_tags reported an error");
                TagUpdateErrorBody {
                    error: "Failed to update villa tags".to_string(),
                    details: Some(message.to_string()),
                }
            }
            None => {
                tracing::error!(error = %self.0, "update_villa_tags call failed");
                TagUpdateErrorBody {
                    error: "Internal server error".to_string(),
                    details: None,
                }
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Public villa routes
pub fn villa_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_villas))
        .route("/:id", get(get_villa))
        .route("/:id/calendar", get(get_calendar))
}

/// Admin villa routes
pub fn villa_admin_routes() -> Router<AppState> {
    Router::new().route("/update-tags", post(update_tags))
}

/// List active villas
#[utoipa::path(
    get,
    path = "/api/villas",
    tag = "Villas",
    params(VillaQuery),
    responses(
        (status = 200, description = "Matching villas", body = VillaSearchResponse),
        (status = 400, description = "Invalid filters")
    )
)]
pub async fn list_villas(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<VillaQuery>,
) -> AppResult<Json<VillaSearchResponse>> {
    let params = query.into_filter();
    let active_filters = params.active_filters();

    let page = state.catalog.search_villas(params).await?;

    Ok(Json(VillaSearchResponse {
        data: page.data,
        meta: page.meta,
        active_filters,
    }))
}

/// Get a villa with its images and tags
#[utoipa::path(
    get,
    path = "/api/villas/{id}",
    tag = "Villas",
    params(
        ("id" = Uuid, Path, description = "Villa ID")
    ),
    responses(
        (status = 200, description = "Villa detail", body = VillaDetail),
        (status = 404, description = "Villa not found")
    )
)]
pub async fn get_villa(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<VillaDetail>> {
    let villa = state.catalog.get_villa(id).await?;
    Ok(Json(villa))
}

/// Get a villa's availability calendar
#[utoipa::path(
    get,
    path = "/api/villas/{id}/calendar",
    tag = "Villas",
    params(
        ("id" = Uuid, Path, description = "Villa ID"),
        CalendarQuery
    ),
    responses(
        (status = 200, description = "Calendar entries ordered by date", body = Vec<CalendarEvent>),
        (status = 400, description = "Invalid range"),
        (status = 404, description = "Villa not found")
    )
)]
pub async fn get_calendar(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedQuery(query): ValidatedQuery<CalendarQuery>,
) -> AppResult<Json<Vec<CalendarEvent>>> {
    let (from, to) = query.range(Utc::now().date_naive())?;
    let events = state.catalog.calendar(id, from, to).await?;
    Ok(Json(events))
}

/// Recompute tags for every villa (admin only)
#[utoipa::path(
    post,
    path = "/api/villas/update-tags",
    tag = "Villas",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tags updated", body = TagUpdateResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 500, description = "Update failed", body = TagUpdateErrorBody)
    )
)]
pub async fn update_tags(
    State(state): State<AppState>,
) -> Result<Json<TagUpdateResponse>, TagUpdateError> {
    state
        .tags
        .update_villa_tags()
        .await
        .map_err(TagUpdateError)?;

    Ok(Json(TagUpdateResponse {
        success: true,
        message: "Villa tags updated successfully".to_string(),
    }))
}
