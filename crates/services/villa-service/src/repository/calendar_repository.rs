//! Calendar lookups. Entries are maintained by the database and only read here.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::entities::calendar_event;
use common::{AppError, AppResult};
use domain::CalendarEvent;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// Entries for one villa with `from <= date <= to`, ordered by date
    async fn events_between(
        &self,
        villa_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<CalendarEvent>>;
}

pub struct CalendarStore {
    db: DatabaseConnection,
}

impl CalendarStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CalendarRepository for CalendarStore {
    async fn events_between(
        &self,
        villa_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<CalendarEvent>> {
        let models = calendar_event::Entity::find()
            .filter(calendar_event::Column::VillaId.eq(villa_id))
            .filter(calendar_event::Column::Date.between(from, to))
            .order_by_asc(calendar_event::Column::Date)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models
            .into_iter()
            .map(|model| CalendarEvent::try_from(model).map_err(AppError::from))
            .collect()
    }
}
