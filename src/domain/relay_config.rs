// Relay configuration domain model
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Host used when the config file leaves `base_url` empty.
pub const DEFAULT_BASE_URL: &str = "https://app.last9.io";

/// Contents of the relay's config file.
///
/// Every key defaults to an empty string so that a missing key and an empty
/// one are reported the same way by [`RelayConfig::validate`]. Values must be
/// JSON strings (or `null`); numbers and booleans are rejected rather than
/// coerced. Key names are matched exactly.
#[derive(Clone, Default, Deserialize)]
pub struct RelayConfig {
    #[serde(default, deserialize_with = "string_only")]
    pub base_url: String,
    #[serde(default, deserialize_with = "string_only")]
    pub org: String,
    #[serde(default, deserialize_with = "string_only")]
    pub refresh_token: String,
}

fn string_only<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOnly;

    impl<'de> Visitor<'de> for StringOnly {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(StringOnly)
}

/// A required config key that was missing or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is required")]
pub struct MissingField(pub &'static str);

impl RelayConfig {
    /// Apply the `base_url` default and check the required keys.
    pub fn validate(self) -> Result<UpstreamTarget, MissingField> {
        let base_url = match self.base_url.trim_end_matches('/') {
            "" => DEFAULT_BASE_URL.to_string(),
            trimmed => trimmed.to_string(),
        };
        if self.org.is_empty() {
            return Err(MissingField("org"));
        }
        if self.refresh_token.is_empty() {
            return Err(MissingField("refresh_token"));
        }

        Ok(UpstreamTarget {
            base_url,
            org: self.org,
            refresh_token: self.refresh_token,
        })
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("base_url", &self.base_url)
            .field("org", &self.org)
            .field("refresh_token", &redact(&self.refresh_token))
            .finish()
    }
}

/// Validated upstream coordinates for one request.
#[derive(Clone, PartialEq, Eq)]
pub struct UpstreamTarget {
    base_url: String,
    org: String,
    refresh_token: String,
}

impl UpstreamTarget {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    /// Endpoint that issues dashboard embed tokens for the organisation.
    pub fn embed_token_url(&self) -> String {
        format!(
            "{}/api/v4/oauth/organizations/{}/dashboard/embed_token",
            self.base_url, self.org
        )
    }

    /// Value for the outbound `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.refresh_token)
    }
}

impl fmt::Debug for UpstreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamTarget")
            .field("base_url", &self.base_url)
            .field("org", &self.org)
            .field("refresh_token", &redact(&self.refresh_token))
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "<redacted>" }
}
