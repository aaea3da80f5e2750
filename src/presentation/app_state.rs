// Application state for HTTP handlers
use crate::application::embed_token_service::EmbedTokenService;

#[derive(Clone)]
pub struct AppState {
    pub embed_token_service: EmbedTokenService,
}
