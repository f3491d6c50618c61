//! Persistent string key-value storage.
//!
//! Session fields and the per-user liked-posts overlay live here. There is no
//! expiry and no transaction across keys: last writer wins.

pub mod memory;
pub mod sqlite;

use anyhow::Result;
use async_trait::async_trait;

pub use memory::MemoryStore;
pub use sqlite::{migrate, SqliteStore};

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    async fn remove_all(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.remove(key).await?;
        }
        Ok(())
    }
}
