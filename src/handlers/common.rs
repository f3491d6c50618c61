use crate::error::AppError;
use axum::extract::Path;
use axum::response::Json;
use axum_extra::extract::WithRejection;
use serde::Serialize;
use social_core::ApiOutcome;

pub async fn root() -> &'static str {
    "Noroff social feed client. Posts, reactions and follows over the v2 social API."
}

pub async fn health() -> &'static str {
    "OK"
}

pub type OutcomeJson<T> = Json<ApiOutcome<T>>;

/// Request extractors whose rejections render as `{success:false, message}`.
pub type JsonBody<T> = WithRejection<Json<T>, AppError>;
pub type PathParam<T> = WithRejection<Path<T>, AppError>;

pub fn ok<T: Serialize>(data: T) -> OutcomeJson<T> {
    Json(ApiOutcome::ok(data))
}
