//! Profile lookups backed by the villa-service repository.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use common::AppResult;
use domain::UserProfile;
use villa_service_lib::repository::ProfileRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Profile operations needed by the auth service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileLookup: Send + Sync {
    /// Find profile by email, including the password hash
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserProfile>>;
}

pub struct ProfileClient {
    repo: Arc<dyn ProfileRepository>,
}

impl ProfileClient {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProfileLookup for ProfileClient {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>> {
        self.repo.find_by_email(email).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserProfile>> {
        self.repo.find_by_id(id).await
    }
}
