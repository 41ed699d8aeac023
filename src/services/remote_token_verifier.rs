use color_eyre::eyre::{Context, Result};
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::config::VerifierConfig;
use crate::domain::{AuthToken, TokenVerifier, TokenVerifierError, VerificationResult};

/// Delegates verification to an HTTP endpoint that answers
/// `{"success": bool, "user": ...}` for a posted `{"token": ...}`.
pub struct RemoteTokenVerifier {
    url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct VerifyTokenRequest<'a> {
    token: &'a str,
}

impl RemoteTokenVerifier {
    pub fn new(config: &VerifierConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .wrap_err("failed to build token verifier HTTP client")?;

        Ok(Self {
            url: config.url.clone(),
            client,
        })
    }
}

#[async_trait::async_trait]
impl TokenVerifier for RemoteTokenVerifier {
    #[tracing::instrument(name = "Remote Verify Token", skip_all)]
    async fn verify_token(
        &self,
        token: &AuthToken,
    ) -> Result<VerificationResult, TokenVerifierError> {
        let request = VerifyTokenRequest {
            token: token.as_ref().expose_secret(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TokenVerifierError::Network(e.into()))?;

        match response.status() {
            status if status.is_success() => response
                .json::<VerificationResult>()
                .await
                .map_err(|e| TokenVerifierError::MalformedResponse(e.into())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(VerificationResult::rejected()),
            status => Err(TokenVerifierError::UnexpectedStatus(status.as_u16())),
        }
    }
}
