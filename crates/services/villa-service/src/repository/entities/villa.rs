//! Villa entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Villa;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "villas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub region: String,
    pub address: Option<String>,
    pub max_guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub price_per_night: f64,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::villa_image::Entity")]
    VillaImage,
    #[sea_orm(has_many = "super::villa_tag::Entity")]
    VillaTag,
    #[sea_orm(has_many = "super::calendar_event::Entity")]
    CalendarEvent,
}

impl Related<super::villa_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VillaImage.def()
    }
}

impl Related<super::villa_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VillaTag.def()
    }
}

impl Related<super::calendar_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CalendarEvent.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::villa_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::villa_tag::Relation::Villa.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Villa {
    fn from(model: Model) -> Self {
        Villa {
            id: model.id,
            name: model.name,
            description: model.description,
            region: model.region,
            address: model.address,
            max_guests: model.max_guests,
            bedrooms: model.bedrooms,
            bathrooms: model.bathrooms,
            price_per_night: model.price_per_night,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
