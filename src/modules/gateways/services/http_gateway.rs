use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use serde_json::Value;

use crate::config::BilletApiConfig;
use crate::core::{AppError, Result};
use crate::modules::billets::models::BilletPayload;

use super::gateway_trait::{BilletGateway, GatewayResult};

const CREATE_BILLET_PATH: &str = "/xpto";

/// HTTP client for the external billet provider
pub struct HttpBilletGateway {
    client: Client,
    base_url: String,
}

impl HttpBilletGateway {
    pub fn new(config: &BilletApiConfig) -> Result<Self> {
        let client = Client::builder()
            .redirect(Policy::limited(10))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl BilletGateway for HttpBilletGateway {
    async fn create_billet(&self, payload: &BilletPayload) -> Result<GatewayResult> {
        let url = format!("{}{}", self.base_url, CREATE_BILLET_PATH);

        let response = self.client.post(&url).json(payload).send().await?;

        let status_code = response.status().as_u16();
        let content: Value = response.json().await.map_err(|e| {
            AppError::GatewayTransport(format!("Malformed billet provider response: {}", e))
        })?;

        Ok(GatewayResult::new(status_code, content))
    }
}
