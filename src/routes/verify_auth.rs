use axum::{
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use axum_extra::extract::{cookie::Cookie, CookieJar};
use color_eyre::eyre::Report;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::{present_user, AuthAPIError, AuthToken, TokenVerifierError, VerificationResult},
    AppState,
};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct VerifyAuthResponse {
    pub success: bool,
    #[serde(
        default,
        deserialize_with = "present_user",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<Value>,
}

#[tracing::instrument(name = "Verify Auth Cookie", skip_all)]
pub async fn verify_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<Json<VerifyAuthResponse>, AuthAPIError> {
    // An empty cookie value is treated the same as no cookie at all
    let token = auth_cookie_value(&jar, &headers, &state.settings.auth.cookie_name)
        .and_then(|value| AuthToken::parse(value).ok())
        .ok_or(AuthAPIError::MissingToken)?;

    let outcome = state.token_verifier.verify_token(&token).await;

    into_auth_response(outcome)
}

fn auth_cookie_value(jar: &CookieJar, headers: &HeaderMap, name: &str) -> Option<String> {
    if let Some(cookie) = jar.get(name) {
        return Some(cookie.value().to_owned());
    }

    // The jar drops cookies whose percent-decoded value is not UTF-8; fall back to the raw value
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| Cookie::parse(pair.trim()).ok())
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
}

fn into_auth_response(
    outcome: Result<VerificationResult, TokenVerifierError>,
) -> Result<Json<VerifyAuthResponse>, AuthAPIError> {
    let result = outcome.map_err(|e| AuthAPIError::VerificationFailed(Report::new(e)))?;

    if !result.success {
        return Err(AuthAPIError::InvalidToken);
    }

    Ok(Json(VerifyAuthResponse {
        success: true,
        user: result.user,
    }))
}
