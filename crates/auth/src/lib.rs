pub mod api;
pub mod session;

pub use api::{login, logout, register};
pub use session::{CurrentUser, SessionStore};
