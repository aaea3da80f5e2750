// HTTP request handlers
use crate::application::error::RelayError;
use crate::infrastructure::http_response::json_response;
use crate::presentation::app_state::AppState;
use anyhow::Context;
use axum::{
    body::{Body, to_bytes},
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Relay a dashboard embed-token request to the upstream API.
///
/// Mounted for every method so that non-POST requests get the relay's own
/// 405 body instead of the router default. The body is taken raw and read
/// only after the method check, with no size limit.
pub async fn embed_token(
    method: Method,
    State(state): State<Arc<AppState>>,
    body: Body,
) -> Response {
    if method != Method::POST {
        return RelayError::InvalidMethod(method).into_response();
    }

    let body = match to_bytes(body, usize::MAX)
        .await
        .context("failed to read request body")
    {
        Ok(body) => body,
        Err(e) => return RelayError::InvalidBody(e).into_response(),
    };

    match state.embed_token_service.request_embed_token(&body).await {
        Ok(upstream_body) => match json_response(upstream_body) {
            Ok(response) => response,
            Err(status) => status.into_response(),
        },
        Err(e) => e.into_response(),
    }
}
