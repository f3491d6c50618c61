use super::common::{ok, JsonBody, OutcomeJson, PathParam};
use super::post::FollowView;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    response::Json,
};
use axum_extra::extract::WithRejection;
use profiles::{FollowControl, FollowState, RemoteFollowApi};
use serde::Deserialize;
use social_core::{ApiOutcome, GatewayError, Post};

pub async fn profile_posts(
    State(state): State<SharedState>,
    WithRejection(Path(name), _): PathParam<String>,
) -> Result<OutcomeJson<Vec<Post>>, AppError> {
    let headers = state.auth_headers().await;
    let res = posts::list_profile_posts(&state.http_client, &state.api, headers, &name).await?;

    Ok(Json(ApiOutcome::ok(res.data).with_meta(res.meta)))
}

fn remote_follow_api(state: &SharedState, headers: reqwest::header::HeaderMap) -> RemoteFollowApi {
    RemoteFollowApi::new(state.http_client.clone(), state.api.clone(), headers)
}

/// Follow state of the current viewer towards `name`.
pub async fn follow_state(
    State(state): State<SharedState>,
    WithRejection(Path(name), _): PathParam<String>,
) -> Result<OutcomeJson<FollowView>, AppError> {
    let viewer = match state.session.user_name().await {
        Some(viewer) if state.session.has_credentials().await => viewer,
        _ => {
            return Err(GatewayError::invalid("You must be logged in to follow!").into());
        }
    };

    let api = remote_follow_api(&state, state.auth_headers().await);
    let follow_state = profiles::initial_state(&api, &viewer, &name).await;

    Ok(ok(FollowView::new(name, follow_state)))
}

#[derive(Debug, Deserialize)]
pub struct FollowRequest {
    /// What the control showed before the click.
    #[serde(default)]
    pub following: bool,
}

pub async fn toggle_follow(
    State(state): State<SharedState>,
    WithRejection(Path(name), _): PathParam<String>,
    WithRejection(Json(req), _): JsonBody<FollowRequest>,
) -> Result<OutcomeJson<FollowView>, AppError> {
    let mut control = FollowControl::new(name, FollowState::from_following(req.following));

    let api = remote_follow_api(&state, state.auth_headers().await);
    let new_state = profiles::toggle_follow(&state.session, &api, &mut control).await?;

    Ok(ok(FollowView::new(control.author, new_state)))
}
