use serde::Deserialize;
use thiserror::Error;

/// Failure of a single call against the remote API.
///
/// `Invalid` is raised before any request is sent. `Remote` carries the
/// status and the message the API put in its `errors` list. `Network` covers
/// transport and decode failures. `Storage` is a local key-value write that
/// failed after the remote call succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Invalid(String),
    #[error("{message}")]
    Remote { status: u16, message: String },
    #[error("Network error")]
    Network,
    #[error("{0}")]
    Storage(String),
}

impl GatewayError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: Option<String>,
}

/// `errors[0].message` of an error response body, if there is a usable one.
pub fn first_error_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    parsed
        .errors
        .into_iter()
        .next()
        .and_then(|e| e.message)
        .filter(|m| !m.is_empty())
}
