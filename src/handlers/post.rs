use super::common::{ok, JsonBody, OutcomeJson, PathParam};
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    response::Json,
};
use axum_extra::extract::WithRejection;
use likes::{ReactionButton, RemoteReactionApi, DEFAULT_SYMBOL};
use profiles::{FollowState, RemoteFollowApi};
use serde::{Deserialize, Serialize};
use social_core::{ApiOutcome, GatewayError, Post, PostDraft, PostId};

pub async fn list_posts(
    State(state): State<SharedState>,
) -> Result<OutcomeJson<Vec<Post>>, AppError> {
    let headers = state.auth_headers().await;
    let res = posts::list_posts(&state.http_client, &state.api, headers).await?;

    Ok(Json(ApiOutcome::ok(res.data).with_meta(res.meta)))
}

pub async fn get_post(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): PathParam<PostId>,
) -> Result<OutcomeJson<Post>, AppError> {
    let headers = state.auth_headers().await;
    let post = posts::get_post(&state.http_client, &state.api, headers, id).await?;
    Ok(ok(post))
}

pub async fn create_post(
    State(state): State<SharedState>,
    WithRejection(Json(draft), _): JsonBody<PostDraft>,
) -> Result<OutcomeJson<Post>, AppError> {
    let headers = state.auth_headers().await;
    let post = posts::create_post(&state.http_client, &state.api, headers, &draft.normalized())
        .await?;

    Ok(Json(ApiOutcome::ok(post).with_message("OK")))
}

pub async fn update_post(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): PathParam<PostId>,
    WithRejection(Json(draft), _): JsonBody<PostDraft>,
) -> Result<OutcomeJson<Post>, AppError> {
    let headers = state.auth_headers().await;
    let post =
        posts::update_post(&state.http_client, &state.api, headers, id, &draft.normalized())
            .await?;

    Ok(Json(
        ApiOutcome::ok(post).with_message("Post updated successfully"),
    ))
}

pub async fn delete_post(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): PathParam<PostId>,
) -> Result<OutcomeJson<()>, AppError> {
    let headers = state.auth_headers().await;
    posts::delete_post(&state.http_client, &state.api, headers, id).await?;
    Ok(Json(ApiOutcome::done("Post deleted successfully")))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowView {
    pub author: String,
    pub following: bool,
    pub label: &'static str,
}

impl FollowView {
    pub fn new(author: impl Into<String>, state: FollowState) -> Self {
        Self {
            author: author.into(),
            following: state.is_following(),
            label: state.label(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub post: Post,
    pub liked: bool,
    pub reactions: u64,
    /// None for anonymous viewers or posts without an author.
    pub follow: Option<FollowView>,
    pub more_from_author: Vec<Post>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_from_author_error: Option<String>,
}

/// Detail view of one post.
///
/// Only a failure to load the post itself fails the request. The follow
/// state and the author strip degrade independently.
pub async fn post_view(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): PathParam<PostId>,
) -> Result<OutcomeJson<PostView>, AppError> {
    let headers = state.auth_headers().await;
    let post = posts::get_post(&state.http_client, &state.api, headers.clone(), id).await?;

    let liked = likes::is_active_for_current_user(&state.session, id).await;
    // Initial display uses the post's own counter; toggles switch to the reaction sum
    let reactions = post.count.reactions;

    let author = post.author_name().map(str::to_string);
    let viewer = state.session.user_name().await;

    let follow = match (&author, &viewer) {
        (Some(author), Some(viewer)) if state.session.has_credentials().await => {
            let api = RemoteFollowApi::new(
                state.http_client.clone(),
                state.api.clone(),
                headers.clone(),
            );
            let follow_state = profiles::initial_state(&api, viewer, author).await;
            Some(FollowView::new(author.clone(), follow_state))
        }
        _ => None,
    };

    let (more_from_author, more_from_author_error) = match &author {
        Some(author) => {
            match posts::list_profile_posts(&state.http_client, &state.api, headers, author).await
            {
                Ok(res) => (posts::more_from_author(res.data, id), None),
                Err(e) => {
                    tracing::warn!("Failed to load posts by {}: {}", author, e);
                    (Vec::new(), Some(e.to_string()))
                }
            }
        }
        None => (Vec::new(), None),
    };

    Ok(ok(PostView {
        post,
        liked,
        reactions,
        follow,
        more_from_author,
        more_from_author_error,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ReactRequest {
    /// What the button showed before the click.
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub count: u64,
    pub symbol: Option<String>,
}

pub async fn react(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): PathParam<PostId>,
    WithRejection(Json(req), _): JsonBody<ReactRequest>,
) -> Result<OutcomeJson<ReactionButton>, AppError> {
    let symbol = req
        .symbol
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());
    let mut button = ReactionButton::new(id, symbol, req.active, req.count);

    let api = RemoteReactionApi::new(
        state.http_client.clone(),
        state.api.clone(),
        state.auth_headers().await,
    );
    let result = likes::react_as_current_user(&state.session, &api, &mut button).await;
    match result {
        Ok(()) => Ok(ok(button)),
        // The remote toggle went through, only remembering it locally failed
        Err(GatewayError::Storage(message)) => {
            Ok(Json(ApiOutcome::ok(button).with_message(message)))
        }
        Err(e) => Err(e.into()),
    }
}
