pub mod account;
pub mod common;
pub mod post;
pub mod profile;

pub use common::{health, root};
