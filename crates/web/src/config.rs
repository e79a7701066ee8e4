//! Web server configuration.

use common::{
    optional_var, parsed_var, process_env, required_var, ConfigError, DatabaseConfig,
    ServiceConfig, SessionConfig, SupabaseConfig,
};

/// Everything the server needs at startup. Loading fails on the first missing
/// or malformed required value.
#[derive(Clone)]
pub struct WebConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub supabase: SupabaseConfig,
    /// Required at startup even though no route calls the API yet
    pub openai_api_key: String,
}

impl std::fmt::Debug for WebConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebConfig")
            .field("service", &self.service)
            .field("database", &self.database)
            .field("session", &self.session)
            .field("supabase", &self.supabase)
            .field("openai_api_key", &"[REDACTED]")
            .finish()
    }
}

impl WebConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServiceConfig::default();
        let service = ServiceConfig {
            service_name: defaults.service_name,
            host: optional_var(lookup, &["WEB_HOST"]).unwrap_or(defaults.host),
            port: parsed_var(lookup, "WEB_PORT", defaults.port)?,
        };

        Ok(Self {
            openai_api_key: required_var(lookup, &["OPENAI_API_KEY"])?,
            service,
            database: DatabaseConfig::from_lookup(lookup)?,
            session: SessionConfig::from_lookup(lookup)?,
            supabase: SupabaseConfig::from_lookup(lookup)?,
        })
    }
}
