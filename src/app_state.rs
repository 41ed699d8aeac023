use std::sync::Arc;

use crate::config::Settings;
use crate::domain::TokenVerifier;

// Using type aliases to improve readability!
pub type TokenVerifierType = Arc<dyn TokenVerifier + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub token_verifier: TokenVerifierType,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(token_verifier: TokenVerifierType, settings: Settings) -> Self {
        Self {
            token_verifier,
            settings: Arc::new(settings),
        }
    }
}
