use async_trait::async_trait;
use serde_json::Value;

use crate::core::Result;
use crate::modules::billets::models::BilletPayload;

/// Outcome of one billet creation call, returned verbatim. A non-2xx
/// status is not an error at this level; classifying success vs. failure
/// belongs to the batch ledger.
#[derive(Debug, Clone)]
pub struct GatewayResult {
    pub status_code: u16,
    pub content: Value,
}

impl GatewayResult {
    pub fn new(status_code: u16, content: Value) -> Self {
        Self {
            status_code,
            content,
        }
    }

    pub fn is_created(&self) -> bool {
        self.status_code == 201
    }
}

/// Billet provider client. Errors only on transport-level failures
/// (connection refused, DNS, malformed response body).
#[async_trait]
pub trait BilletGateway: Send + Sync {
    /// Issue one billet creation request. Single attempt, no retry.
    async fn create_billet(&self, payload: &BilletPayload) -> Result<GatewayResult>;
}
