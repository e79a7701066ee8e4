//! Authentication service - sign-in and session resolution.
//!
//! Uses the domain Password value object for verification and signed JWTs as
//! session tokens.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::client::ProfileLookup;
use crate::config::AuthServiceConfig;
use crate::session::{Session, SessionClaims, SignedSession, UserSession};
use common::{AppError, AppResult};
use domain::{Password, UserProfile, SECONDS_PER_HOUR};

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue a session token
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<SignedSession>;

    /// Verify a token and map its claims into a session
    fn verify_token(&self, token: &str) -> AppResult<Session>;

    /// Resolve a token into a session with its profile.
    ///
    /// Invalid, expired and tampered tokens resolve to `None`.
    async fn resolve_session(&self, token: &str) -> Option<UserSession>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    profiles: Arc<dyn ProfileLookup>,
    config: AuthServiceConfig,
}

impl Authenticator {
    pub fn new(profiles: Arc<dyn ProfileLookup>, config: AuthServiceConfig) -> Self {
        Self { profiles, config }
    }

    fn lifetime_secs(&self) -> AppResult<i64> {
        self.config
            .session_expiration_hours
            .checked_mul(SECONDS_PER_HOUR)
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Session lifetime of {} hours is out of range",
                    self.config.session_expiration_hours
                ))
            })
    }

    /// Sign a token for `profile`. Role and id come from the stored record.
    fn issue(&self, profile: &UserProfile) -> AppResult<SignedSession> {
        let lifetime = self.lifetime_secs()?;
        let claims = SessionClaims::for_profile(profile, Utc::now(), lifetime);

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret_bytes()),
        )?;

        Ok(SignedSession {
            token,
            session: Session::from_claims(claims)?,
            expires_in: lifetime,
        })
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<SignedSession> {
        let profile = self.profiles.find_by_email(email).await?;

        // Verify against a dummy hash when the account is unknown or has no
        // password so response timing does not reveal which emails exist.
        let stored = profile
            .as_ref()
            .and_then(|p| p.password_hash.as_deref())
            .map(Password::from_hash)
            .unwrap_or_else(Password::unverifiable);
        let password_valid = stored.verify(password);

        let profile = match profile {
            Some(profile) if password_valid => profile,
            _ => return Err(AppError::InvalidCredentials),
        };

        if !profile.is_active() {
            tracing::info!(user_id = %profile.id, status = %profile.status, "Sign-in refused for inactive account");
            return Err(AppError::Forbidden);
        }

        tracing::info!(user_id = %profile.id, "User signed in");
        self.issue(&profile)
    }

    fn verify_token(&self, token: &str) -> AppResult<Session> {
        let token_data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.config.secret_bytes()),
            &Validation::default(),
        )?;

        Session::from_claims(token_data.claims)
    }

    async fn resolve_session(&self, token: &str) -> Option<UserSession> {
        let session = match self.verify_token(token) {
            Ok(session) => session,
            Err(e) => {
                tracing::debug!("Ignoring session token: {}", e);
                return None;
            }
        };

        let profile = match self.profiles.find_by_id(session.user.id).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(user_id = %session.user.id, "Profile lookup failed: {}", e);
                None
            }
        };

        Some(UserSession { session, profile })
    }
}
