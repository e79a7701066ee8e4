//! Villa catalog queries.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select,
};
use sea_orm::JoinType;
use uuid::Uuid;

use super::entities::{calendar_event, tag, villa, villa_image, villa_tag};
use common::{AppError, AppResult};
use domain::{FilterParams, Tag, Villa, VillaImage, CALENDAR_AVAILABLE};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One page of matching villas plus the total match count
#[derive(Debug, Clone, PartialEq)]
pub struct VillaPage {
    pub villas: Vec<Villa>,
    pub total: u64,
}

/// Read access to villas and their images and tags.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VillaRepository: Send + Sync {
    /// Active villas matching `params`, ordered by name
    async fn search(&self, params: &FilterParams) -> AppResult<VillaPage>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Villa>>;

    /// Images of a villa ordered by `sort_order`
    async fn images_for(&self, villa_id: Uuid) -> AppResult<Vec<VillaImage>>;

    /// Tags of a villa ordered by name
    async fn tags_for(&self, villa_id: Uuid) -> AppResult<Vec<Tag>>;
}

pub struct VillaStore {
    db: DatabaseConnection,
}

impl VillaStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Apply every set criterion to the base query.
///
/// Tags are conjunctive: each named tag adds its own membership test. A stay
/// excludes villas with any non-available calendar entry in `[check_in, check_out)`.
fn filtered(params: &FilterParams) -> Select<villa::Entity> {
    let mut query = villa::Entity::find().filter(villa::Column::IsActive.eq(true));

    if let Some(region) = params.region() {
        query = query.filter(villa::Column::Region.eq(region));
    }

    if let Some(guests) = params.guests {
        let guests = i32::try_from(guests).unwrap_or(i32::MAX);
        query = query.filter(villa::Column::MaxGuests.gte(guests));
    }

    for name in params.tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        query = query.filter(
            villa::Column::Id.in_subquery(
                Query::select()
                    .column((villa_tag::Entity, villa_tag::Column::VillaId))
                    .from(villa_tag::Entity)
                    .inner_join(
                        tag::Entity,
                        Expr::col((tag::Entity, tag::Column::Id))
                            .equals((villa_tag::Entity, villa_tag::Column::TagId)),
                    )
                    .and_where(Expr::col((tag::Entity, tag::Column::Name)).eq(name))
                    .to_owned(),
            ),
        );
    }

    if let Some((check_in, check_out)) = params.stay() {
        query = query.filter(
            villa::Column::Id.not_in_subquery(
                Query::select()
                    .column(calendar_event::Column::VillaId)
                    .from(calendar_event::Entity)
                    .and_where(calendar_event::Column::Date.gte(check_in))
                    .and_where(calendar_event::Column::Date.lt(check_out))
                    .and_where(calendar_event::Column::Status.ne(CALENDAR_AVAILABLE))
                    .to_owned(),
            ),
        );
    }

    query
}

#[async_trait]
impl VillaRepository for VillaStore {
    async fn search(&self, params: &FilterParams) -> AppResult<VillaPage> {
        let paginator = filtered(params)
            .order_by_asc(villa::Column::Name)
            .order_by_asc(villa::Column::Id)
            .paginate(&self.db, params.limit());

        let total = paginator.num_items().await.map_err(AppError::from)?;
        let models = paginator
            .fetch_page(params.page() - 1)
            .await
            .map_err(AppError::from)?;

        Ok(VillaPage {
            villas: models.into_iter().map(Villa::from).collect(),
            total,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Villa>> {
        let result = villa::Entity::find_by_id(id)
            .filter(villa::Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Villa::from))
    }

    async fn images_for(&self, villa_id: Uuid) -> AppResult<Vec<VillaImage>> {
        let models = villa_image::Entity::find()
            .filter(villa_image::Column::VillaId.eq(villa_id))
            .order_by_asc(villa_image::Column::SortOrder)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(VillaImage::from).collect())
    }

    async fn tags_for(&self, villa_id: Uuid) -> AppResult<Vec<Tag>> {
        let models = tag::Entity::find()
            .join(JoinType::InnerJoin, tag::Relation::VillaTag.def())
            .filter(villa_tag::Column::VillaId.eq(villa_id))
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Tag::from).collect())
    }
}
