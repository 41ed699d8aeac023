use std::sync::Arc;

use auth_verify_service::{
    app_state::AppState,
    config::Settings,
    services::MockTokenVerifier,
    utils::constants::{prod::VERIFY_AUTH_ROUTE, test},
    Application,
};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use reqwest::{cookie::Jar, Url};
use serde_json::Value;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub cookie_jar: Arc<Jar>,
    pub token_verifier: MockTokenVerifier,
    pub settings: Settings,
}

impl TestApp {
    pub async fn new(token_verifier: MockTokenVerifier) -> Self {
        let settings = Settings::new().expect("Failed to load configuration");

        let app_state = AppState::new(Arc::new(token_verifier.clone()), settings.clone());

        let app = Application::build(app_state, test::APP_ADDRESS)
            .await
            .expect("Failed to build app");

        let address = format!("http://{}", app.address.clone());

        // Run the service in a separate async task
        // to avoid blocking the main test thread.
        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let cookie_jar = Arc::new(Jar::default());
        let http_client = reqwest::Client::builder()
            .cookie_provider(cookie_jar.clone())
            .build()
            .expect("Failed to build HTTP client");

        Self {
            address,
            http_client,
            cookie_jar,
            token_verifier,
            settings,
        }
    }

    pub fn set_auth_cookie(&self, token: &str) {
        self.cookie_jar.add_cookie_str(
            &format!(
                "{}={}; HttpOnly; SameSite=Lax; Path=/",
                self.settings.auth.cookie_name, token
            ),
            &Url::parse(&self.address).expect("Failed to parse URL"),
        );
    }

    pub async fn get_verify_auth(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}{}", &self.address, VERIFY_AUTH_ROUTE))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    // Bypasses the cookie jar so the exact Cookie header is under test control
    pub async fn get_verify_auth_with_cookie_header(&self, cookie: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}{}", &self.address, VERIFY_AUTH_ROUTE))
            .header(reqwest::header::COOKIE, cookie)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_verify_auth(&self) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", &self.address, VERIFY_AUTH_ROUTE))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn get_random_token() -> String {
    Uuid::new_v4().to_string()
}

pub fn get_random_user() -> Value {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    serde_json::json!({
        "id": Uuid::new_v4(),
        "name": name,
        "email": email,
    })
}
