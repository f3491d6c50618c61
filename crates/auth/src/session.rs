use anyhow::Result;
use kvstore::KeyValueStore;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const KEY_ACCESS_TOKEN: &str = "accessToken";
pub const KEY_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_USER_NAME: &str = "userName";
pub const KEY_USER_EMAIL: &str = "userEmail";

const SESSION_KEYS: [&str; 4] = [KEY_LOGGED_IN, KEY_USER_EMAIL, KEY_USER_NAME, KEY_ACCESS_TOKEN];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub name: String,
    pub email: Option<String>,
    pub is_logged_in: bool,
}

/// Session fields on top of the persistent store.
///
/// Nothing is cached in memory. Every call reads the store again, so a write
/// from another handler is visible immediately.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        self.store.clone()
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read session key {}: {:#}", key, e);
                None
            }
        }
    }

    pub async fn is_logged_in(&self) -> bool {
        self.read(KEY_LOGGED_IN).await.as_deref() == Some("true")
    }

    pub async fn access_token(&self) -> Option<String> {
        self.read(KEY_ACCESS_TOKEN).await
    }

    pub async fn user_name(&self) -> Option<String> {
        self.read(KEY_USER_NAME).await
    }

    /// Logged-in flag set and a non-empty token stored. Reactions and follows
    /// require both.
    pub async fn has_credentials(&self) -> bool {
        self.is_logged_in().await
            && self
                .access_token()
                .await
                .is_some_and(|token| !token.is_empty())
    }

    pub async fn current_user(&self) -> Option<CurrentUser> {
        if !self.is_logged_in().await {
            return None;
        }

        Some(CurrentUser {
            name: self.user_name().await.unwrap_or_default(),
            email: self.read(KEY_USER_EMAIL).await,
            is_logged_in: true,
        })
    }

    pub async fn save(&self, token: &str, name: &str, email: &str) -> Result<()> {
        self.store.set(KEY_ACCESS_TOKEN, token).await?;
        self.store.set(KEY_USER_NAME, name).await?;
        self.store.set(KEY_USER_EMAIL, email).await?;
        self.store.set(KEY_LOGGED_IN, "true").await?;
        Ok(())
    }

    /// Removes every session key. Never fails.
    pub async fn clear(&self) {
        for key in SESSION_KEYS {
            if let Err(e) = self.store.remove(key).await {
                tracing::warn!("Failed to remove session key {}: {:#}", key, e);
            }
        }
    }

    pub async fn auth_headers(&self, api_key: &str) -> HeaderMap {
        let token = self.access_token().await;
        social_core::auth_headers(token.as_deref(), api_key)
    }
}
