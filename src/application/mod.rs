// Application layer - Relay use case and its collaborators
pub mod config_store;
pub mod embed_token_service;
pub mod error;
pub mod upstream;

#[cfg(test)]
pub mod testing;
