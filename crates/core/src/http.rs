//! Response normalization shared by every gateway call.

use crate::error::{first_error_message, GatewayError};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Sends the request once. No retries, no timeouts.
pub async fn send(req: RequestBuilder) -> Result<Response, GatewayError> {
    req.send().await.map_err(|e| {
        tracing::warn!("Request to remote API failed: {}", e);
        GatewayError::Network
    })
}

/// Passes 2xx responses through and turns everything else into
/// `GatewayError::Remote`.
///
/// The message is the body's first `errors[].message`, else `fallback`, else
/// `HTTP <status>`. An empty or non-JSON body is not a transport failure.
pub async fn ensure_success(
    res: Response,
    fallback: Option<&str>,
) -> Result<Response, GatewayError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.bytes().await.unwrap_or_default();
    let message = first_error_message(&body)
        .or_else(|| fallback.map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    tracing::warn!(status = status.as_u16(), "Remote API error: {}", message);
    Err(GatewayError::Remote {
        status: status.as_u16(),
        message,
    })
}

pub async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, GatewayError> {
    res.json::<T>().await.map_err(|e| {
        tracing::warn!("Failed to parse remote API response: {}", e);
        GatewayError::Network
    })
}

/// `send` + `ensure_success` + `decode` in one go.
pub async fn fetch_json<T: DeserializeOwned>(
    req: RequestBuilder,
    fallback: Option<&str>,
) -> Result<T, GatewayError> {
    let res = send(req).await?;
    let res = ensure_success(res, fallback).await?;
    decode(res).await
}
