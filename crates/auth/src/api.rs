use crate::session::{CurrentUser, SessionStore};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use social_core::validate::{default_profile_name, validate_login, validate_registration};
use social_core::{http, ApiConfig, Envelope, GatewayError, Profile};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginData {
    name: String,
    #[serde(default)]
    email: Option<String>,
    access_token: String,
}

/// Exchanges credentials for an access token and persists the session.
pub async fn login(
    client: &Client,
    config: &ApiConfig,
    session: &SessionStore,
    email: &str,
    password: &str,
) -> Result<CurrentUser, GatewayError> {
    validate_login(email, password)?;

    let req = client
        .post(config.url("/auth/login"))
        .json(&LoginRequest { email, password });
    let res: Envelope<LoginData> = http::fetch_json(req, Some("Login failed")).await?;

    let data = res.data;
    let email = data.email.unwrap_or_else(|| email.to_string());
    session
        .save(&data.access_token, &data.name, &email)
        .await
        .map_err(|e| {
            tracing::error!("Failed to persist session: {:#}", e);
            GatewayError::Storage("Failed to save session".to_string())
        })?;

    tracing::info!("Logged in as {}", data.name);
    Ok(CurrentUser {
        name: data.name,
        email: Some(email),
        is_logged_in: true,
    })
}

/// Creates an account. The caller still has to log in afterwards.
pub async fn register(
    client: &Client,
    config: &ApiConfig,
    email: &str,
    password: &str,
    confirm_password: &str,
    name: &str,
) -> Result<Profile, GatewayError> {
    validate_registration(email, password, confirm_password)?;

    let name = if name.is_empty() {
        default_profile_name(email)
    } else {
        name
    };

    let req = client.post(config.url("/auth/register")).json(&RegisterRequest {
        name,
        email,
        password,
    });
    let res: Envelope<Profile> = http::fetch_json(req, Some("Registration failed")).await?;

    tracing::info!("Registered profile {}", res.data.name);
    Ok(res.data)
}

pub async fn logout(session: &SessionStore) {
    session.clear().await;
    tracing::info!("Logged out");
}
