// Domain layer - Request and configuration models
pub mod embed_request;
pub mod relay_config;
