pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod outcome;
pub mod validate;

pub use config::{auth_headers, ApiConfig};
pub use error::GatewayError;
pub use models::{
    Author, Envelope, Media, PageMeta, Post, PostCount, PostDraft, PostId, Profile,
    ProfileSummary, Reaction, ReactionSummary,
};
pub use outcome::ApiOutcome;

/// Percent-encodes a single path segment (profile names, reaction symbols).
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
