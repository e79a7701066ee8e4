//! User profile lookups.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::entities::user::{self, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::UserProfile;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to the `users` table.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a profile by its user ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Find a profile by email address (case-insensitive)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>>;
}

pub struct ProfileStore {
    db: DatabaseConnection,
}

impl ProfileStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn into_profile(model: Option<user::Model>) -> AppResult<Option<UserProfile>> {
    model
        .map(UserProfile::try_from)
        .transpose()
        .map_err(AppError::from)
}

#[async_trait]
impl ProfileRepository for ProfileStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserProfile>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        into_profile(result)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email.trim().to_lowercase()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        into_profile(result)
    }
}
