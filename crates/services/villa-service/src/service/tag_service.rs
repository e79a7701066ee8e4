//! Bulk villa tag maintenance.
//!
//! Tag assignment is computed by the `update_villa_tags` stored procedure. It is
//! treated as opaque: no parameters, no partial results, no retry.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use domain::RPC_UPDATE_VILLA_TAGS;

use crate::infra::{RpcClient, RpcError};

#[async_trait]
pub trait TagMaintenance: Send + Sync {
    /// Recompute tags for every villa
    async fn update_villa_tags(&self) -> Result<(), RpcError>;
}

pub struct TagUpdater {
    rpc: Arc<dyn RpcClient>,
}

impl TagUpdater {
    pub fn new(rpc: Arc<dyn RpcClient>) -> Self {
        Self { rpc }
    }
}

#[async_trait]
impl TagMaintenance for TagUpdater {
    async fn update_villa_tags(&self) -> Result<(), RpcError> {
        self.rpc.rpc(RPC_UPDATE_VILLA_TAGS, json!({})).await?;
        tracing::info!("Villa tags updated");
        Ok(())
    }
}
