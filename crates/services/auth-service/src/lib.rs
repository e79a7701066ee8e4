//! Auth Service Library
//!
//! Signs users in against their stored profile and resolves session tokens
//! back into sessions. Profiles are read through villa-service.

pub mod client;
pub mod config;
pub mod service;
pub mod session;

use std::sync::Arc;

use villa_service_lib::repository::ProfileRepository;

use crate::client::ProfileClient;
use crate::config::AuthServiceConfig;
use crate::service::Authenticator;

pub use session::{Session, SessionClaims, SessionUser, SignedSession, UserSession};

/// Build the authenticator over a profile repository.
pub fn authenticator(
    profiles: Arc<dyn ProfileRepository>,
    config: AuthServiceConfig,
) -> Authenticator {
    Authenticator::new(Arc::new(ProfileClient::new(profiles)), config)
}
