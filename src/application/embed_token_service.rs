// Embed token service - Use case for relaying embed-token requests
use crate::application::config_store::ConfigStore;
use crate::application::error::RelayError;
use crate::application::upstream::EmbedTokenUpstream;
use crate::domain::embed_request::DashboardRequest;
use bytes::Bytes;
use std::sync::Arc;

#[derive(Clone)]
pub struct EmbedTokenService {
    config_store: Arc<dyn ConfigStore>,
    upstream: Arc<dyn EmbedTokenUpstream>,
}

impl EmbedTokenService {
    pub fn new(config_store: Arc<dyn ConfigStore>, upstream: Arc<dyn EmbedTokenUpstream>) -> Self {
        Self {
            config_store,
            upstream,
        }
    }

    /// Decode the inbound body, attach the stored credentials and forward it.
    ///
    /// Each step short-circuits: a bad body never loads config, and a bad
    /// config never reaches the upstream.
    pub async fn request_embed_token(&self, body: &[u8]) -> Result<Bytes, RelayError> {
        let request =
            DashboardRequest::from_json(body).map_err(|e| RelayError::InvalidBody(e.into()))?;

        let config = self
            .config_store
            .load()
            .await
            .map_err(RelayError::ConfigUnreadable)?;
        let target = config.validate()?;

        tracing::debug!(
            dashboard_id = %request.dashboard_id,
            org = %target.org(),
            "Forwarding embed token request"
        );

        self.upstream
            .forward(&request, &target)
            .await
            .map_err(RelayError::UpstreamCallFailed)
    }
}
