pub mod api;
pub mod follow;

use auth::SessionStore;
use social_core::GatewayError;

pub use api::{follow, get_profile_following, unfollow};
pub use follow::{initial_state, FollowApi, FollowControl, FollowState, RemoteFollowApi};

/// Toggle on behalf of the stored session. Refuses before any request when
/// nobody is logged in.
pub async fn toggle_follow<A: FollowApi + ?Sized>(
    session: &SessionStore,
    api: &A,
    control: &mut FollowControl,
) -> Result<FollowState, GatewayError> {
    if !session.has_credentials().await {
        return Err(GatewayError::invalid("You must be logged in to follow!"));
    }
    control.toggle(api).await
}
