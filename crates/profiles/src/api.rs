use reqwest::header::HeaderMap;
use reqwest::Client;
use social_core::{http, segment, ApiConfig, Envelope, GatewayError, Profile};

/// The profile with its `following` list embedded.
pub async fn get_profile_following(
    client: &Client,
    config: &ApiConfig,
    headers: HeaderMap,
    name: &str,
) -> Result<Profile, GatewayError> {
    if name.trim().is_empty() {
        return Err(GatewayError::invalid("Profile name is required"));
    }

    let req = client
        .get(config.url(&format!("/social/profiles/{}", segment(name))))
        .headers(headers)
        .query(&[("_following", "true")]);

    let res: Envelope<Profile> = http::fetch_json(req, None).await?;
    Ok(res.data)
}

pub async fn follow(
    client: &Client,
    config: &ApiConfig,
    headers: HeaderMap,
    name: &str,
) -> Result<(), GatewayError> {
    put_edge(client, config, headers, name, "follow").await
}

pub async fn unfollow(
    client: &Client,
    config: &ApiConfig,
    headers: HeaderMap,
    name: &str,
) -> Result<(), GatewayError> {
    put_edge(client, config, headers, name, "unfollow").await
}

async fn put_edge(
    client: &Client,
    config: &ApiConfig,
    headers: HeaderMap,
    name: &str,
    action: &str,
) -> Result<(), GatewayError> {
    let url = config.url(&format!("/social/profiles/{}/{}", segment(name), action));
    let res = http::send(client.put(url).headers(headers)).await?;
    http::ensure_success(res, None).await?;

    tracing::info!("{} {}: ok", action, name);
    Ok(())
}
