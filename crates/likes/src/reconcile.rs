use crate::overlay::LikeOverlay;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use social_core::models::total_reactions;
use social_core::{ApiConfig, GatewayError, PostId, Reaction};

pub const DEFAULT_SYMBOL: &str = "👍";

/// The user's own reaction state after a click: the opposite of what the
/// button showed before the click.
///
/// This is a policy, not a measurement. Replace it once the remote API can
/// report per-user reactors.
pub fn infer_toggle(was_active: bool) -> bool {
    !was_active
}

/// State of a reaction button as the UI last showed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionButton {
    pub post_id: PostId,
    pub symbol: String,
    pub active: bool,
    pub count: u64,
    pub enabled: bool,
}

impl ReactionButton {
    pub fn new(post_id: PostId, symbol: impl Into<String>, active: bool, count: u64) -> Self {
        Self {
            post_id,
            symbol: symbol.into(),
            active,
            count,
            enabled: true,
        }
    }
}

#[async_trait]
pub trait ReactionApi: Send + Sync {
    /// Reaction list of the post after the toggle.
    async fn react(&self, post_id: PostId, symbol: &str) -> Result<Vec<Reaction>, GatewayError>;
}

pub struct RemoteReactionApi {
    client: Client,
    config: ApiConfig,
    headers: HeaderMap,
}

impl RemoteReactionApi {
    pub fn new(client: Client, config: ApiConfig, headers: HeaderMap) -> Self {
        Self {
            client,
            config,
            headers,
        }
    }
}

#[async_trait]
impl ReactionApi for RemoteReactionApi {
    async fn react(&self, post_id: PostId, symbol: &str) -> Result<Vec<Reaction>, GatewayError> {
        let summary = posts::react(
            &self.client,
            &self.config,
            self.headers.clone(),
            post_id,
            symbol,
        )
        .await?;
        Ok(summary.reactions)
    }
}

/// One click on a reaction button.
///
/// On success the displayed count becomes the server's aggregate, the active
/// flag follows `infer_toggle` and the overlay records it. On failure the
/// button and the overlay are left as they were. The button is disabled
/// while the request is in flight.
///
/// If the remote toggle succeeds but the overlay write fails, the button
/// still shows the server state and `GatewayError::Storage` is returned.
pub async fn toggle_reaction<A: ReactionApi + ?Sized>(
    api: &A,
    overlay: &LikeOverlay,
    button: &mut ReactionButton,
) -> Result<(), GatewayError> {
    let was_active = button.active;
    button.enabled = false;

    let result = api.react(button.post_id, &button.symbol).await;
    let outcome = match result {
        Ok(reactions) => {
            let active = infer_toggle(was_active);
            button.count = total_reactions(&reactions);
            button.active = active;

            match overlay
                .set_liked(&button.post_id.to_string(), active)
                .await
            {
                Ok(()) => Ok(()),
                Err(e) => {
                    tracing::warn!("Failed to record like for post {}: {:#}", button.post_id, e);
                    Err(GatewayError::Storage(
                        "Reaction saved, but it could not be remembered locally".to_string(),
                    ))
                }
            }
        }
        Err(e) => Err(e),
    };

    button.enabled = true;
    outcome
}
