// In-memory collaborators for handler and service tests
use crate::application::config_store::ConfigStore;
use crate::application::upstream::EmbedTokenUpstream;
use crate::domain::embed_request::DashboardRequest;
use crate::domain::relay_config::{RelayConfig, UpstreamTarget};
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct FakeConfigStore {
    config: Option<RelayConfig>,
    loads: AtomicUsize,
}

impl FakeConfigStore {
    pub fn with(config: RelayConfig) -> Self {
        Self {
            config: Some(config),
            loads: AtomicUsize::new(0),
        }
    }

    /// `org = acme`, `refresh_token = rt-1`, default base URL.
    pub fn valid() -> Self {
        Self::with(RelayConfig {
            base_url: String::new(),
            org: "acme".to_string(),
            refresh_token: "rt-1".to_string(),
        })
    }

    pub fn unreadable() -> Self {
        Self {
            config: None,
            loads: AtomicUsize::new(0),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigStore for FakeConfigStore {
    async fn load(&self) -> anyhow::Result<RelayConfig> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.config
            .clone()
            .ok_or_else(|| anyhow::anyhow!("config.json: no such file"))
    }
}

pub struct RecordingUpstream {
    response: Option<Bytes>,
    calls: Mutex<Vec<(DashboardRequest, UpstreamTarget)>>,
}

impl RecordingUpstream {
    pub fn returning(body: &'static str) -> Self {
        Self {
            response: Some(Bytes::from_static(body.as_bytes())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(DashboardRequest, UpstreamTarget)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmbedTokenUpstream for RecordingUpstream {
    async fn forward(
        &self,
        request: &DashboardRequest,
        target: &UpstreamTarget,
    ) -> anyhow::Result<Bytes> {
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), target.clone()));
        self.response
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }
}
