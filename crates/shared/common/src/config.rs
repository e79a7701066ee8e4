//! Shared configuration structures.
//!
//! Values come from the process environment (after `dotenvy` has loaded `.env`).
//! Loaders take a lookup function so tests can supply variables without touching
//! the real environment.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use domain::{
    DEFAULT_SESSION_EXPIRATION_HOURS, MAX_SESSION_EXPIRATION_HOURS, MIN_SESSION_SECRET_LENGTH,
};

/// Configuration errors. Raised at startup or client construction and never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

/// Read a variable from the process environment.
pub fn process_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// First non-empty value among `names`, or an error naming the primary variable.
pub fn required_var<F>(lookup: &F, names: &[&str]) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional_var(lookup, names)
        .ok_or_else(|| ConfigError::MissingEnvVar(names.first().copied().unwrap_or("").to_string()))
}

/// First non-empty value among `names`.
pub fn optional_var<F>(lookup: &F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Parse an optional variable, falling back to `default` when unset.
pub fn parsed_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match optional_var(lookup, &[name]) {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: name.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "villa-web".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Database configuration.
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .finish()
    }
}

impl DatabaseConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            url: required_var(lookup, &["DATABASE_URL"])?,
        })
    }
}

/// Session token signing configuration.
#[derive(Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(skip_serializing)]
    pub secret: String,
    pub expiration_hours: i64,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"[REDACTED]")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

impl SessionConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = required_var(lookup, &["SESSION_SECRET", "AUTH_SECRET"])?;
        if secret.len() < MIN_SESSION_SECRET_LENGTH {
            return Err(ConfigError::InvalidEnvValue {
                var: "SESSION_SECRET".to_string(),
                reason: format!(
                    "must be at least {} characters long",
                    MIN_SESSION_SECRET_LENGTH
                ),
            });
        }

        let expiration_hours = parsed_var(
            lookup,
            "SESSION_EXPIRATION_HOURS",
            DEFAULT_SESSION_EXPIRATION_HOURS,
        )?;
        if !(1..=MAX_SESSION_EXPIRATION_HOURS).contains(&expiration_hours) {
            return Err(ConfigError::InvalidEnvValue {
                var: "SESSION_EXPIRATION_HOURS".to_string(),
                reason: format!("must be between 1 and {}", MAX_SESSION_EXPIRATION_HOURS),
            });
        }

        Ok(Self {
            secret,
            expiration_hours,
        })
    }
}

/// Hosted database (PostgREST) credentials. Both values are public.
#[derive(Clone, Deserialize, Serialize)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

impl SupabaseConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&process_env)
    }

    /// Fails if either credential is unset or blank.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            url: required_var(lookup, &["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"])?,
            anon_key: required_var(
                lookup,
                &["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"],
            )?,
        })
    }
}
