//! Calendar event entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{CalendarEvent, CalendarEventType, DomainError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "calendar_events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub villa_id: Uuid,
    pub date: Date,
    pub status: String,
    pub price: Option<f64>,
    pub note: Option<String>,
    pub event_type: Option<String>,
    pub reservation_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::villa::Entity",
        from = "Column::VillaId",
        to = "super::villa::Column::Id"
    )]
    Villa,
}

impl Related<super::villa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Villa.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for CalendarEvent {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(CalendarEvent {
            id: model.id,
            villa_id: model.villa_id,
            date: model.date,
            status: model.status.parse()?,
            price: model.price,
            note: model.note,
            event_type: model.event_type.as_deref().map(str::parse::<CalendarEventType>).transpose()?,
            reservation_id: model.reservation_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use domain::CalendarStatus;

    use super::*;

    fn model(status: &str, event_type: Option<&str>) -> Model {
        let now = Utc::now();
        Model {
            id: Uuid::new_v4(),
            villa_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
            status: status.to_string(),
            price: Some(420.0),
            note: None,
            event_type: event_type.map(str::to_string),
            reservation_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn parses_status_and_event_type() {
        let event = CalendarEvent::try_from(model("RESERVED", Some("CHECKIN"))).unwrap();
        assert_eq!(event.status, CalendarStatus::Reserved);
        assert_eq!(event.event_type, Some(CalendarEventType::Checkin));
    }

    #[test]
    fn unknown_values_are_errors() {
        assert!(CalendarEvent::try_from(model("HOLD", None)).is_err());
        assert!(CalendarEvent::try_from(model("AVAILABLE", Some("CLEANING"))).is_err());
    }
}
