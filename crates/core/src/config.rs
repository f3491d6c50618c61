use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

pub const DEFAULT_API_URL: &str = "https://v2.api.noroff.dev";
pub const API_KEY_HEADER: &str = "X-Noroff-API-Key";

/// Where the remote social API lives and which static key it expects.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ApiConfig {
    pub fn new(mut base_url: String, api_key: String) -> Self {
        // Remove trailing slash if present
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, api_key }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Builds the fixed header set for authenticated requests.
///
/// The token is not checked in any way. A missing token still produces a
/// `Bearer ` header and the remote API answers 401, which callers handle.
pub fn auth_headers(token: Option<&str>, api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let bearer = format!("Bearer {}", token.unwrap_or_default());
    match HeaderValue::from_str(&bearer) {
        Ok(value) => {
            headers.insert(AUTHORIZATION, value);
        }
        Err(e) => tracing::warn!("Stored access token is not a valid header value: {}", e),
    }

    match HeaderValue::from_str(api_key) {
        Ok(value) => {
            headers.insert(API_KEY_HEADER, value);
        }
        Err(e) => tracing::warn!("API key is not a valid header value: {}", e),
    }

    headers
}
