// Route table and middleware stack
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{embed_token, health_check};
use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{any, get},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Any origin, simple methods only.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::ORIGIN,
            header::ACCEPT,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-requested-with"),
        ])
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/embed-token", any(embed_token))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
