pub mod overlay;
pub mod reconcile;

use auth::SessionStore;
use social_core::{GatewayError, PostId};

pub use overlay::LikeOverlay;
pub use reconcile::{
    infer_toggle, toggle_reaction, ReactionApi, ReactionButton, RemoteReactionApi,
    DEFAULT_SYMBOL,
};

/// Overlay of whoever is logged in right now, if anyone.
pub async fn current_overlay(session: &SessionStore) -> Option<LikeOverlay> {
    let user = session.user_name().await?;
    Some(LikeOverlay::for_user(session.store(), &user))
}

/// Initial look of a reaction button: active only with a stored token and a
/// remembered like.
pub async fn is_active_for_current_user(session: &SessionStore, post_id: PostId) -> bool {
    let has_token = session
        .access_token()
        .await
        .is_some_and(|token| !token.is_empty());
    if !has_token {
        return false;
    }

    match current_overlay(session).await {
        Some(overlay) => overlay.is_liked(&post_id.to_string()).await,
        None => false,
    }
}

/// `toggle_reaction` for the stored session. Refuses before any request when
/// nobody is logged in.
pub async fn react_as_current_user<A: ReactionApi + ?Sized>(
    session: &SessionStore,
    api: &A,
    button: &mut ReactionButton,
) -> Result<(), GatewayError> {
    let not_logged_in = || GatewayError::invalid("You must be logged in to react.");

    if !session.has_credentials().await {
        return Err(not_logged_in());
    }
    let overlay = current_overlay(session).await.ok_or_else(not_logged_in)?;

    toggle_reaction(api, &overlay, button).await
}
