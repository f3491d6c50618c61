use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use social_core::{
    http, segment, ApiConfig, Envelope, GatewayError, Media, Post, PostDraft, PostId,
    ReactionSummary,
};

// Embed author and reactions in every read
const EMBED: [(&str, &str); 2] = [("_author", "true"), ("_reactions", "true")];

#[derive(Serialize)]
struct UpdateRequest<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
    tags: Vec<String>,
    media: Media,
}

pub async fn list_posts(
    client: &Client,
    config: &ApiConfig,
    headers: HeaderMap,
) -> Result<Envelope<Vec<Post>>, GatewayError> {
    let req = client
        .get(config.url("/social/posts"))
        .headers(headers)
        .query(&EMBED);

    http::fetch_json(req, None).await
}

pub async fn list_profile_posts(
    client: &Client,
    config: &ApiConfig,
    headers: HeaderMap,
    name: &str,
) -> Result<Envelope<Vec<Post>>, GatewayError> {
    if name.trim().is_empty() {
        return Err(GatewayError::invalid("Profile name is required"));
    }

    let url = config.url(&format!("/social/profiles/{}/posts", segment(name)));
    let req = client.get(url).headers(headers).query(&EMBED);

    http::fetch_json(req, None).await
}

pub async fn get_post(
    client: &Client,
    config: &ApiConfig,
    headers: HeaderMap,
    id: PostId,
) -> Result<Post, GatewayError> {
    let req = client
        .get(config.url(&format!("/social/posts/{}", id)))
        .headers(headers)
        .query(&EMBED);

    let res: Envelope<Post> = http::fetch_json(req, None).await?;
    Ok(res.data)
}

pub async fn create_post(
    client: &Client,
    config: &ApiConfig,
    headers: HeaderMap,
    draft: &PostDraft,
) -> Result<Post, GatewayError> {
    if draft.title.trim().is_empty() {
        return Err(GatewayError::invalid("Title is required"));
    }

    let req = client
        .post(config.url("/social/posts"))
        .headers(headers)
        .json(draft);

    let res: Envelope<Post> = http::fetch_json(req, None).await?;
    tracing::info!("Created post {}", res.data.id);
    Ok(res.data)
}

/// Full replacement. Absent tags and media are sent as empty values, which
/// clears them on the remote side.
pub async fn update_post(
    client: &Client,
    config: &ApiConfig,
    headers: HeaderMap,
    id: PostId,
    draft: &PostDraft,
) -> Result<Post, GatewayError> {
    if draft.title.trim().is_empty() {
        return Err(GatewayError::invalid("Title is required"));
    }

    let body = UpdateRequest {
        title: &draft.title,
        body: draft.body.as_deref(),
        tags: draft.tags.clone().unwrap_or_default(),
        media: draft.media.clone().unwrap_or_default(),
    };
    let req = client
        .put(config.url(&format!("/social/posts/{}", id)))
        .headers(headers)
        .json(&body);

    let res: Envelope<Post> = http::fetch_json(req, None).await?;
    tracing::info!("Updated post {}", id);
    Ok(res.data)
}

pub async fn delete_post(
    client: &Client,
    config: &ApiConfig,
    headers: HeaderMap,
    id: PostId,
) -> Result<(), GatewayError> {
    let req = client
        .delete(config.url(&format!("/social/posts/{}", id)))
        .headers(headers);

    let res = http::send(req).await?;
    http::ensure_success(res, None).await?;
    tracing::info!("Deleted post {}", id);
    Ok(())
}

/// Toggles the caller's `symbol` reaction on the post. The API answers with
/// the aggregate counts only.
pub async fn react(
    client: &Client,
    config: &ApiConfig,
    mut headers: HeaderMap,
    id: PostId,
    symbol: &str,
) -> Result<ReactionSummary, GatewayError> {
    // Bodyless PUT, sent without Content-Type
    headers.remove(CONTENT_TYPE);

    let url = config.url(&format!("/social/posts/{}/react/{}", id, segment(symbol)));
    let req = client.put(url).headers(headers);

    let res: Envelope<ReactionSummary> = http::fetch_json(req, None).await?;
    Ok(res.data)
}
