//! User profile entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainError, NotificationPreferences, UserProfile};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub role: String,
    pub status: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub two_factor_enabled: bool,
    pub notification_preferences: Option<Json>,
    pub last_login_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Role and status columns are closed sets; anything else is a data error.
impl TryFrom<Model> for UserProfile {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let notification_preferences = model
            .notification_preferences
            .and_then(|raw| match serde_json::from_value::<NotificationPreferences>(raw) {
                Ok(prefs) => Some(prefs),
                Err(e) => {
                    tracing::warn!(user_id = %model.id, "Ignoring malformed notification preferences: {}", e);
                    None
                }
            });

        Ok(UserProfile {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            name: model.name,
            role: model.role.parse()?,
            status: model.status.parse()?,
            phone: model.phone,
            address: model.address,
            city: model.city,
            country: model.country,
            postal_code: model.postal_code,
            two_factor_enabled: model.two_factor_enabled,
            notification_preferences,
            last_login_at: model.last_login_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
