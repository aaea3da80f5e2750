// Config store trait for relay configuration access
use crate::domain::relay_config::RelayConfig;
use async_trait::async_trait;

#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the current configuration. Called once per request, never cached.
    async fn load(&self) -> anyhow::Result<RelayConfig>;
}
