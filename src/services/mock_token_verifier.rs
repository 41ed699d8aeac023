use std::{collections::HashMap, sync::Arc};

use color_eyre::eyre::eyre;
use secrecy::ExposeSecret;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::domain::{AuthToken, TokenVerifier, TokenVerifierError, VerificationResult};

#[derive(Debug, Clone)]
pub enum MockVerification {
    Accept(Value),
    Reject,
    Fail,
}

// Mock implementation for testing. Tokens without a scripted outcome are rejected.
#[derive(Default, Clone)]
pub struct MockTokenVerifier {
    outcomes: HashMap<String, MockVerification>,
    received: Arc<RwLock<Vec<String>>>,
}

impl MockTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(mut self, token: impl Into<String>, outcome: MockVerification) -> Self {
        self.outcomes.insert(token.into(), outcome);
        self
    }

    /// Every token passed to `verify_token`, in call order.
    pub async fn received_tokens(&self) -> Vec<String> {
        self.received.read().await.clone()
    }
}

#[async_trait::async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify_token(
        &self,
        token: &AuthToken,
    ) -> Result<VerificationResult, TokenVerifierError> {
        let token = token.as_ref().expose_secret().to_owned();
        self.received.write().await.push(token.clone());

        match self.outcomes.get(&token) {
            Some(MockVerification::Accept(user)) => Ok(VerificationResult::accepted(user.clone())),
            Some(MockVerification::Fail) => Err(TokenVerifierError::UnexpectedError(eyre!(
                "mock verifier configured to fail"
            ))),
            Some(MockVerification::Reject) | None => Ok(VerificationResult::rejected()),
        }
    }
}
