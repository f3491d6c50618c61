//! Follow / unfollow state per (viewer, author) pair.
//!
//! The state is recomputed from the viewer's following list every time a
//! detail view is entered and is never cached.

use crate::api;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use social_core::{ApiConfig, GatewayError, ProfileSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowState {
    Following,
    NotFollowing,
}

impl FollowState {
    pub fn from_following(following: bool) -> Self {
        if following {
            Self::Following
        } else {
            Self::NotFollowing
        }
    }

    pub fn is_following(self) -> bool {
        self == Self::Following
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Following => Self::NotFollowing,
            Self::NotFollowing => Self::Following,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Following => "Following",
            Self::NotFollowing => "Follow",
        }
    }
}

#[async_trait]
pub trait FollowApi: Send + Sync {
    async fn following(&self, viewer: &str) -> Result<Vec<ProfileSummary>, GatewayError>;

    async fn follow(&self, author: &str) -> Result<(), GatewayError>;

    async fn unfollow(&self, author: &str) -> Result<(), GatewayError>;
}

/// `FollowApi` against the remote API with the session's headers.
pub struct RemoteFollowApi {
    client: Client,
    config: ApiConfig,
    headers: HeaderMap,
}

impl RemoteFollowApi {
    pub fn new(client: Client, config: ApiConfig, headers: HeaderMap) -> Self {
        Self {
            client,
            config,
            headers,
        }
    }
}

#[async_trait]
impl FollowApi for RemoteFollowApi {
    async fn following(&self, viewer: &str) -> Result<Vec<ProfileSummary>, GatewayError> {
        let profile =
            api::get_profile_following(&self.client, &self.config, self.headers.clone(), viewer)
                .await?;
        Ok(profile.following)
    }

    async fn follow(&self, author: &str) -> Result<(), GatewayError> {
        api::follow(&self.client, &self.config, self.headers.clone(), author).await
    }

    async fn unfollow(&self, author: &str) -> Result<(), GatewayError> {
        api::unfollow(&self.client, &self.config, self.headers.clone(), author).await
    }
}

/// Whether `viewer` currently follows `author`, by case-insensitive name.
///
/// Any failure while fetching the list yields `NotFollowing`.
pub async fn initial_state<A: FollowApi + ?Sized>(
    api: &A,
    viewer: &str,
    author: &str,
) -> FollowState {
    match api.following(viewer).await {
        Ok(following) => {
            let author = author.to_lowercase();
            FollowState::from_following(following.iter().any(|f| f.name.to_lowercase() == author))
        }
        Err(e) => {
            tracing::warn!("Failed to load following list for {}: {}", viewer, e);
            FollowState::NotFollowing
        }
    }
}

/// The follow button of a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowControl {
    pub author: String,
    pub state: FollowState,
    pub enabled: bool,
}

impl FollowControl {
    pub fn new(author: impl Into<String>, state: FollowState) -> Self {
        Self {
            author: author.into(),
            state,
            enabled: true,
        }
    }

    pub fn label(&self) -> &'static str {
        self.state.label()
    }

    /// Disables the control, calls follow or unfollow depending on the
    /// current state, flips the state only on success and re-enables the
    /// control in every case.
    pub async fn toggle<A: FollowApi + ?Sized>(
        &mut self,
        api: &A,
    ) -> Result<FollowState, GatewayError> {
        self.enabled = false;

        let result = match self.state {
            FollowState::Following => api.unfollow(&self.author).await,
            FollowState::NotFollowing => api.follow(&self.author).await,
        };
        if result.is_ok() {
            self.state = self.state.flipped();
        }

        self.enabled = true;
        result.map(|()| self.state)
    }
}
