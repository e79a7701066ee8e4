//! Client for the hosted database's PostgREST interface.
//!
//! Only stored procedures are called through it; tables are read over the
//! direct database connection.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use common::{ConfigError, SupabaseConfig};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Failure of a remote procedure call
#[derive(Error, Debug)]
pub enum RpcError {
    /// The procedure ran and reported an error
    #[error("{message}")]
    Upstream {
        status: u16,
        message: String,
        details: Option<String>,
        hint: Option<String>,
        code: Option<String>,
    },

    /// The request never produced a usable response
    #[error("RPC request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed RPC response: {0}")]
    Decode(String),
}

impl RpcError {
    /// Message reported by the procedure, if it got that far
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            RpcError::Upstream { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// PostgREST error body; every field is optional in practice
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
    code: Option<String>,
}

impl RpcError {
    fn from_response(status: reqwest::StatusCode, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .filter(|m| !m.trim().is_empty())
            .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
            .unwrap_or_else(|| status.to_string());

        RpcError::Upstream {
            status: status.as_u16(),
            message,
            details: parsed.details,
            hint: parsed.hint,
            code: parsed.code,
        }
    }
}

/// Calls named stored procedures.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RpcClient: Send + Sync {
    /// Invoke `name` with a JSON object of named arguments.
    async fn rpc(&self, name: &str, params: Value) -> Result<Value, RpcError>;
}

/// PostgREST client authenticated with the public anonymous key.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url)
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key,
        }
    }

    /// Build from the environment. Fails before any request is made when the
    /// URL or anonymous key is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(SupabaseConfig::from_env()?))
    }

    fn rpc_url(&self, name: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.base_url, name)
    }
}

#[async_trait]
impl RpcClient for SupabaseClient {
    async fn rpc(&self, name: &str, params: Value) -> Result<Value, RpcError> {
        tracing::debug!(procedure = name, "Calling remote procedure");

        let response = self
            .http
            .post(self.rpc_url(name))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .json(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RpcError::from_response(status, &body));
        }

        // Void procedures answer with an empty body
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| RpcError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_fields_are_kept() {
        let err = RpcError::from_response(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"code":"PGRST202","details":"Searched for update_villa_tags","hint":null,"message":"Could not find the function"}"#,
        );
        match err {
            RpcError::Upstream {
                status,
                message,
                details,
                hint,
                code,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Could not find the function");
                assert_eq!(details.as_deref(), Some("Searched for update_villa_tags"));
                assert_eq!(hint, None);
                assert_eq!(code.as_deref(), Some("PGRST202"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn non_json_error_uses_raw_body() {
        let err = RpcError::from_response(reqwest::StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.upstream_message(), Some("upstream down"));
    }

    #[test]
    fn empty_error_uses_status_text() {
        let err = RpcError::from_response(reqwest::StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(err.upstream_message(), Some("503 Service Unavailable"));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = SupabaseClient::new(SupabaseConfig {
            url: "https://x.supabase.co/".to_string(),
            anon_key: "public-anon-key".to_string(),
        });
        assert_eq!(
            client.rpc_url("update_villa_tags"),
            "https://x.supabase.co/rest/v1/rpc/update_villa_tags"
        );
        assert!(!format!("{:?}", client).contains("public-anon-key"));
    }
}
