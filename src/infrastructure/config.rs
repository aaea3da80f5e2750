use crate::application::config_store::ConfigStore;
use crate::domain::relay_config::RelayConfig;
use anyhow::Context;
use async_trait::async_trait;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Config file read on every request, relative to the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Port the relay listens on. Not overridable.
pub const LISTEN_PORT: u16 = 8080;

/// Process-wide server settings, built once at startup.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
    pub config_path: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: LISTEN_PORT,
            config_path: PathBuf::from(CONFIG_FILE),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

pub fn load_relay_config(path: &Path) -> anyhow::Result<RelayConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::new(
            &path.to_string_lossy(),
            config::FileFormat::Json,
        ))
        .build()
        .with_context(|| format!("error reading config file {}", path.display()))?;

    settings
        .try_deserialize()
        .with_context(|| format!("error unmarshalling config {}", path.display()))
}

/// [`ConfigStore`] backed by a JSON file on disk, re-read on every call.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    async fn load(&self) -> anyhow::Result<RelayConfig> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || load_relay_config(&path))
            .await
            .context("config loader task failed")?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "embed-token-relay-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_settings() {
        let settings = ServerSettings::default();
        assert_eq!(settings.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(settings.config_path, PathBuf::from("config.json"));
    }

    #[test]
    fn test_load_full_config() {
        let path = write_temp(
            "full",
            r#"{"base_url": "https://example.com", "org": "acme", "refresh_token": "rt-1"}"#,
        );

        let config = load_relay_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.org, "acme");
        assert_eq!(config.refresh_token, "rt-1");
    }

    #[test]
    fn test_load_missing_keys_as_empty() {
        let path = write_temp("sparse", r#"{"org": "acme"}"#);

        let config = load_relay_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.base_url, "");
        assert_eq!(config.org, "acme");
        assert_eq!(config.refresh_token, "");
    }

    #[test]
    fn test_load_rejects_non_string_values() {
        let path = write_temp("typed", r#"{"org": 123, "refresh_token": true}"#);

        let result = load_relay_config(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn test_load_null_values_as_empty() {
        let path = write_temp("nulls", r#"{"base_url": null, "org": "acme", "refresh_token": null}"#);

        let config = load_relay_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.base_url, "");
        assert_eq!(config.refresh_token, "");
    }

    #[test]
    fn test_load_key_names_are_exact() {
        let path = write_temp("casing", r#"{"ORG": "acme", "Refresh_Token": "rt-1"}"#);

        let config = load_relay_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.org, "");
        assert_eq!(config.refresh_token, "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("embed-token-relay-does-not-exist.json");
        assert!(load_relay_config(&path).is_err());
    }

    #[test]
    fn test_load_malformed_file() {
        let path = write_temp("malformed", "{ this is not json");

        let result = load_relay_config(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_file_store_rereads_file() {
        let path = write_temp("reread", r#"{"org": "first", "refresh_token": "rt"}"#);
        let store = FileConfigStore::new(&path);

        assert_eq!(store.load().await.unwrap().org, "first");

        std::fs::write(&path, r#"{"org": "second", "refresh_token": "rt"}"#).unwrap();
        assert_eq!(store.load().await.unwrap().org, "second");

        std::fs::remove_file(&path).unwrap();
    }
}
