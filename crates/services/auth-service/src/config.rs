//! Auth service configuration.

use common::SessionConfig;

/// Auth service configuration.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Secret for signing session tokens (min 32 characters)
    pub session_secret: String,
    /// Session lifetime in hours
    pub session_expiration_hours: i64,
}

impl AuthServiceConfig {
    /// Get the signing secret as bytes.
    pub fn secret_bytes(&self) -> &[u8] {
        self.session_secret.as_bytes()
    }
}

impl From<SessionConfig> for AuthServiceConfig {
    fn from(config: SessionConfig) -> Self {
        Self {
            session_secret: config.secret,
            session_expiration_hours: config.expiration_hours,
        }
    }
}
