//! Villa image entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::VillaImage;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "villa_images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub villa_id: Uuid,
    pub url: String,
    pub alt: Option<String>,
    pub sort_order: i32,
    pub is_cover_image: bool,
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

impl From<Model> for VillaImage {
    fn from(model: Model) -> Self {
        VillaImage {
            id: model.id,
            villa_id: model.villa_id,
            url: model.url,
            alt: model.alt,
            sort_order: model.sort_order,
            is_cover_image: model.is_cover_image,
        }
    }
}
