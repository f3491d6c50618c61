use auth::SessionStore;
use reqwest::header::HeaderMap;
use social_core::ApiConfig;

pub type SharedState = AppState;

#[derive(Clone)]
pub struct AppState {
    pub api: ApiConfig,
    pub http_client: reqwest::Client,
    pub session: SessionStore,
}

impl AppState {
    /// Headers for the next remote call, from whatever session is stored now.
    pub async fn auth_headers(&self) -> HeaderMap {
        self.session.auth_headers(&self.api.api_key).await
    }
}
