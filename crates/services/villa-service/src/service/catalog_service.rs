//! Villa catalog - listing, detail and calendar reads.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use common::types::Paginated;
use common::{AppError, AppResult, OptionExt};
use domain::{CalendarEvent, FilterParams, Villa, VillaDetail};

use crate::repository::{CalendarRepository, VillaRepository};

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait VillaCatalog: Send + Sync {
    /// List active villas matching every criterion in `params`
    async fn search_villas(&self, params: FilterParams) -> AppResult<Paginated<Villa>>;

    /// Get an active villa with images and tags
    async fn get_villa(&self, id: Uuid) -> AppResult<VillaDetail>;

    /// Calendar entries for `from..=to`
    async fn calendar(
        &self,
        villa_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<CalendarEvent>>;
}

pub struct CatalogManager {
    villas: Arc<dyn VillaRepository>,
    calendar: Arc<dyn CalendarRepository>,
}

impl CatalogManager {
    pub fn new(villas: Arc<dyn VillaRepository>, calendar: Arc<dyn CalendarRepository>) -> Self {
        Self { villas, calendar }
    }
}

#[async_trait]
impl VillaCatalog for CatalogManager {
    async fn search_villas(&self, params: FilterParams) -> AppResult<Paginated<Villa>> {
        params.validate()?;

        let page = self.villas.search(&params).await?;
        tracing::debug!(
            total = page.total,
            filters = params.active_filters().len(),
            "Villa search"
        );

        Ok(Paginated::new(
            page.villas,
            params.page(),
            params.limit(),
            page.total,
        ))
    }

    async fn get_villa(&self, id: Uuid) -> AppResult<VillaDetail> {
        let villa = self
            .villas
            .find_by_id(id)
            .await?
            .ok_or_not_found()?;

        let images = self.villas.images_for(id).await?;
        let tags = self.villas.tags_for(id).await?;

        Ok(VillaDetail::new(villa, images, tags))
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

        self.villas.find_by_id(villa_id).await?.ok_or_not_found()?;

        self.calendar.events_between(villa_id, from, to).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::repository::{MockCalendarRepository, MockVillaRepository, VillaPage};
    use domain::{Tag, VillaImage};

    fn villa(id: Uuid) -> Villa {
        let now = Utc::now();
        Villa {
            id,
            name: "Casa Azul".to_string(),
            description: None,
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

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, day).unwrap()
    }

    fn catalog(villas: MockVillaRepository, calendar: MockCalendarRepository) -> CatalogManager {
        CatalogManager::new(Arc::new(villas), Arc::new(calendar))
    }

    #[tokio::test]
    async fn search_rejects_invalid_criteria_without_querying() {
        let mut villas = MockVillaRepository::new();
        villas.expect_search().never();

        let service = catalog(villas, MockCalendarRepository::new());
        let params = FilterParams {
            check_in: Some(date(10)),
            check_out: Some(date(9)),
            ..FilterParams::default()
        };

        let result = service.search_villas(params).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn search_wraps_page_in_metadata() {
        let mut villas = MockVillaRepository::new();
        villas.expect_search().times(1).returning(|_| {
            Ok(VillaPage {
                villas: vec![villa(Uuid::new_v4())],
                total: 13,
            })
        });

        let service = catalog(villas, MockCalendarRepository::new());
        let params = FilterParams {
            page: 2,
            per_page: 12,
            ..FilterParams::default()
        };

        let page = service.search_villas(params).await.unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.meta.total, 13);
        assert_eq!(page.meta.total_pages, 2);
    }

    #[tokio::test]
    async fn detail_orders_images() {
        let id = Uuid::new_v4();
        let mut villas = MockVillaRepository::new();
        villas
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |id| Ok(Some(villa(id))));
        villas.expect_images_for().returning(move |villa_id| {
            Ok([2, 0, 1]
                .into_iter()
                .map(|order| VillaImage {
                    id: Uuid::new_v4(),
                    villa_id,
                    url: format!("https://cdn.example.com/{}.jpg", order),
                    alt: None,
                    sort_order: order,
                    is_cover_image: false,
                })
                .collect())
        });
        villas.expect_tags_for().returning(|_| {
            Ok(vec![Tag {
                id: Uuid::new_v4(),
                name: "pool".to_string(),
                created_at: Utc::now(),
            }])
        });

        let detail = catalog(villas, MockCalendarRepository::new())
            .get_villa(id)
            .await
            .unwrap();

        let orders: Vec<_> = detail.images.iter().map(|i| i.sort_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert_eq!(detail.tags.len(), 1);
        assert_eq!(detail.cover_image().unwrap().sort_order, 0);
    }

    #[tokio::test]
    async fn detail_of_unknown_villa_is_not_found() {
        let mut villas = MockVillaRepository::new();
        villas.expect_find_by_id().returning(|_| Ok(None));

        let result = catalog(villas, MockCalendarRepository::new())
            .get_villa(Uuid::new_v4())
            .await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn calendar_rejects_inverted_range() {
        let mut villas = MockVillaRepository::new();
        villas.expect_find_by_id().never();

        let result = catalog(villas, MockCalendarRepository::new())
            .calendar(Uuid::new_v4(), date(5), date(4))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn calendar_single_day_range_is_allowed() {
        let id = Uuid::new_v4();
        let mut villas = MockVillaRepository::new();
        villas
            .expect_find_by_id()
            .returning(move |id| Ok(Some(villa(id))));

        let mut calendar = MockCalendarRepository::new();
        calendar
            .expect_events_between()
            .with(eq(id), eq(date(5)), eq(date(5)))
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let events = catalog(villas, calendar)
            .calendar(id, date(5), date(5))
            .await
            .unwrap();
        assert!(events.is_empty());
    }
}
