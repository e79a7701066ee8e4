//! Session types.
//!
//! Tokens carry [`SessionClaims`]. Everything past token verification works with
//! the locally owned [`Session`], built by [`Session::from_claims`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{UserProfile, UserRole};

/// Signed token payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for `profile`, valid from `issued_at` for `lifetime_secs`.
    pub fn for_profile(profile: &UserProfile, issued_at: DateTime<Utc>, lifetime_secs: i64) -> Self {
        Self {
            sub: profile.id,
            id: profile.id,
            email: profile.email.clone(),
            name: profile.name.clone(),
            role: profile.role,
            iat: issued_at.timestamp(),
            exp: issued_at.timestamp().saturating_add(lifetime_secs),
        }
    }
}

/// Identity carried by a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
}

/// Verified session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub expires: DateTime<Utc>,
}

impl Session {
    /// Map verified token claims into a session.
    pub fn from_claims(claims: SessionClaims) -> AppResult<Self> {
        let expires = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AppError::internal(format!("Token expiry out of range: {}", claims.exp)))?;

        Ok(Self {
            user: SessionUser {
                id: claims.id,
                email: claims.email,
                name: claims.name,
                role: claims.role,
            },
            expires,
        })
    }

    pub fn role(&self) -> UserRole {
        self.user.role
    }
}

/// Session paired with the stored profile, if it could be loaded
#[derive(Debug, Clone)]
pub struct UserSession {
    pub session: Session,
    pub profile: Option<UserProfile>,
}

impl UserSession {
    /// Role from the stored profile. Without a profile the caller has no role,
    /// whatever the token says.
    pub fn role(&self) -> Option<UserRole> {
        self.profile.as_ref().map(|profile| profile.role)
    }
}

/// Token plus the session it encodes, returned on sign-in
#[derive(Debug, Clone)]
pub struct SignedSession {
    pub token: String,
    pub session: Session,
    /// Lifetime in seconds
    pub expires_in: i64,
}
