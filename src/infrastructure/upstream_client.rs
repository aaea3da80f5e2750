// Embed-token API client implementation
use crate::application::upstream::EmbedTokenUpstream;
use crate::domain::embed_request::DashboardRequest;
use crate::domain::relay_config::UpstreamTarget;
use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct ReqwestUpstream {
    client: reqwest::Client,
}

impl ReqwestUpstream {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmbedTokenUpstream for ReqwestUpstream {
    async fn forward(&self, request: &DashboardRequest, target: &UpstreamTarget) -> Result<Bytes> {
        let url = target.embed_token_url();
        let payload =
            serde_json::to_vec(request).context("Failed to serialize dashboard request")?;

        let response = self
            .client
            .post(&url)
            .header("Authorization", target.authorization())
            .header("Content-Type", "application/json")
            .body(payload)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        tracing::debug!("Upstream {} responded with status {}", url, response.status());

        response
            .bytes()
            .await
            .context("Failed to read upstream response body")
    }
}
