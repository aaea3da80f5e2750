// Relay error taxonomy
use crate::domain::relay_config::MissingField;
use axum::http::Method;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("method {0} not allowed")]
    InvalidMethod(Method),

    #[error("invalid request body: {0:#}")]
    InvalidBody(anyhow::Error),

    #[error("error reading config: {0:#}")]
    ConfigUnreadable(anyhow::Error),

    #[error("invalid config: {0}")]
    ConfigInvalid(#[from] MissingField),

    #[error("error making API call: {0:#}")]
    UpstreamCallFailed(anyhow::Error),
}
