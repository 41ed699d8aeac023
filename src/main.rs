use std::sync::Arc;

use auth_verify_service::{
    app_state::AppState, config::Settings, services::RemoteTokenVerifier,
    utils::tracing::init_tracing, Application,
};
use color_eyre::eyre::{eyre, Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::new().wrap_err("Failed to load configuration")?;

    let token_verifier = Arc::new(
        RemoteTokenVerifier::new(&settings.verifier).wrap_err("Failed to build token verifier")?,
    );
    tracing::info!(url = %settings.verifier.url, "delegating token verification");

    let address = settings.server_address();
    let app_state = AppState::new(token_verifier, settings);

    let app = Application::build(app_state, &address)
        .await
        .map_err(|e| eyre!("Failed to build app: {}", e))?;

    app.run().await.wrap_err("Failed to run app")
}
