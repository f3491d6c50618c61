//! Local "did I react" memory, one JSON object per user.
//!
//! The remote API only reports aggregate counts, so this map is a guess
//! recorded at click time. It can disagree with the server after reacting
//! from another device.

use anyhow::{Context, Result};
use kvstore::KeyValueStore;
use std::collections::BTreeMap;
use std::sync::Arc;

pub fn storage_key(user_name: &str) -> String {
    format!("localLikedPosts:{}", user_name)
}

pub struct LikeOverlay {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl LikeOverlay {
    pub fn for_user(store: Arc<dyn KeyValueStore>, user_name: &str) -> Self {
        Self {
            store,
            key: storage_key(user_name),
        }
    }

    /// Stored map. Missing or unreadable data counts as "no likes".
    async fn load(&self) -> BTreeMap<String, bool> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {:#}", self.key, e);
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring corrupt {}: {}", self.key, e);
            BTreeMap::new()
        })
    }

    pub async fn is_liked(&self, post_id: &str) -> bool {
        self.load().await.get(post_id).copied().unwrap_or(false)
    }

    /// `true` inserts the key, `false` removes it.
    pub async fn set_liked(&self, post_id: &str, liked: bool) -> Result<()> {
        let mut map = self.load().await;
        if liked {
            map.insert(post_id.to_string(), true);
        } else {
            map.remove(post_id);
        }

        let raw = serde_json::to_string(&map)?;
        self.store
            .set(&self.key, &raw)
            .await
            .with_context(|| format!("Failed to write {}", self.key))
    }

    pub async fn toggle(&self, post_id: &str) -> Result<bool> {
        let liked = !self.is_liked(post_id).await;
        self.set_liked(post_id, liked).await?;
        Ok(liked)
    }

    pub async fn liked_ids(&self) -> Vec<String> {
        self.load()
            .await
            .into_iter()
            .filter(|(_, liked)| *liked)
            .map(|(id, _)| id)
            .collect()
    }
}
