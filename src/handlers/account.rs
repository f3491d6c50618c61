use super::common::{ok, JsonBody, OutcomeJson};
use crate::error::AppError;
use crate::state::SharedState;
use auth::CurrentUser;
use axum::{extract::State, response::Json};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use social_core::{ApiOutcome, Profile};

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

pub async fn login(
    State(state): State<SharedState>,
    WithRejection(Json(form), _): JsonBody<LoginForm>,
) -> Result<OutcomeJson<CurrentUser>, AppError> {
    let user = auth::login(
        &state.http_client,
        &state.api,
        &state.session,
        form.email.trim(),
        &form.password,
    )
    .await?;

    Ok(Json(ApiOutcome::ok(user).with_message("Login successful!")))
}

pub async fn register(
    State(state): State<SharedState>,
    WithRejection(Json(form), _): JsonBody<RegisterForm>,
) -> Result<OutcomeJson<Profile>, AppError> {
    let profile = auth::register(
        &state.http_client,
        &state.api,
        form.email.trim(),
        &form.password,
        &form.confirm_password,
        form.name.trim(),
    )
    .await?;

    Ok(Json(
        ApiOutcome::ok(profile).with_message("Registration successful! You can now log in."),
    ))
}

pub async fn logout(State(state): State<SharedState>) -> OutcomeJson<()> {
    auth::logout(&state.session).await;
    Json(ApiOutcome::done("Logged out successfully"))
}

/// `success: false` (still 200) when nobody is logged in.
pub async fn me(State(state): State<SharedState>) -> OutcomeJson<CurrentUser> {
    match state.session.current_user().await {
        Some(user) => ok(user),
        None => Json(ApiOutcome::failure("Not logged in")),
    }
}
