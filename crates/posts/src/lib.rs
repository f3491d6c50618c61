pub mod api;

use social_core::{Post, PostId};

pub use api::{
    create_post, delete_post, get_post, list_posts, list_profile_posts, react, update_post,
};

/// The author's other posts, for the "more from this author" strip of the
/// detail view.
pub fn more_from_author(posts: Vec<Post>, exclude: PostId) -> Vec<Post> {
    posts.into_iter().filter(|p| p.id != exclude).collect()
}
