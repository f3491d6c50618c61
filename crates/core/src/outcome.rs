use crate::models::PageMeta;
use serde::{Deserialize, Serialize};

/// Uniform `{success, data?, meta?, message?}` shape handed to the UI layer.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiOutcome<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiOutcome<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            meta: None,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            meta: None,
            message: Some(message.into()),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_meta(mut self, meta: Option<PageMeta>) -> Self {
        self.meta = meta;
        self
    }
}

impl ApiOutcome<()> {
    /// Success without a payload (logout, delete).
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            meta: None,
            message: Some(message.into()),
        }
    }
}
