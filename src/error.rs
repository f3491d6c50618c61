use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use social_core::GatewayError;
use tracing::{error, warn};

#[derive(Debug)]
pub enum AppError {
    Gateway(GatewayError),
    /// Malformed request (body or path) rejected before any handler code ran.
    BadRequest(String),
}

impl AppError {
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            AppError::Gateway(err) => {
                let status = match &err {
                    GatewayError::Invalid(_) => StatusCode::BAD_REQUEST,
                    GatewayError::Remote { status, .. } => StatusCode::from_u16(*status)
                        .ok()
                        .filter(|s| s.is_client_error() || s.is_server_error())
                        .unwrap_or(StatusCode::BAD_GATEWAY),
                    GatewayError::Network => StatusCode::BAD_GATEWAY,
                    GatewayError::Storage(msg) => {
                        error!("Storage error: {}", msg);
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, err.to_string())
            }
            AppError::BadRequest(message) => {
                warn!("Rejected request: {}", message);
                (StatusCode::BAD_REQUEST, message)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        AppError::Gateway(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
