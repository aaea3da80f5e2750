// Mapping of relay errors onto HTTP responses
use crate::application::error::RelayError;
use crate::infrastructure::http_response::text_response;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl RelayError {
    /// Status and caller-facing message. Details stay in the server log.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            RelayError::InvalidMethod(_) => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            RelayError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "Invalid request body"),
            RelayError::ConfigUnreadable(_) | RelayError::ConfigInvalid(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            RelayError::UpstreamCallFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error making API call")
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }
        text_response(status, message)
    }
}
