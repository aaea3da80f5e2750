// Upstream trait for the embed-token API
use crate::domain::embed_request::DashboardRequest;
use crate::domain::relay_config::UpstreamTarget;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait EmbedTokenUpstream: Send + Sync {
    /// POST the request to the target's embed-token endpoint and return the
    /// raw response body. The upstream status code is not interpreted.
    async fn forward(&self, request: &DashboardRequest, target: &UpstreamTarget)
        -> anyhow::Result<Bytes>;
}
