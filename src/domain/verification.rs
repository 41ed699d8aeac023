use color_eyre::eyre::Report;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::AuthToken;

/// Outcome reported by a [`TokenVerifier`].
///
/// `user` is whatever the verifier attaches to an accepted token. Its shape
/// belongs to the verifier and is forwarded to the client untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub success: bool,
    #[serde(
        default,
        deserialize_with = "present_user",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<Value>,
}

/// Keeps an explicit `"user": null` as `Some(Value::Null)`; only a missing key is `None`.
pub fn present_user<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl VerificationResult {
    pub fn accepted(user: Value) -> Self {
        Self {
            success: true,
            user: Some(user),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            user: None,
        }
    }
}

#[async_trait::async_trait]
pub trait TokenVerifier {
    async fn verify_token(&self, token: &AuthToken)
        -> Result<VerificationResult, TokenVerifierError>;
}

#[derive(Debug, Error)]
pub enum TokenVerifierError {
    #[error("Failed to reach token verifier")]
    Network(#[source] Report),
    #[error("Token verifier responded with unexpected status {0}")]
    UnexpectedStatus(u16),
    #[error("Token verifier returned a malformed response")]
    MalformedResponse(#[source] Report),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}
