pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post, put},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use state::SharedState;
use std::str::FromStr;
use tower_http::trace::TraceLayer;

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/auth/login", post(handlers::account::login))
        .route("/auth/register", post(handlers::account::register))
        .route("/auth/logout", post(handlers::account::logout))
        .route("/auth/me", get(handlers::account::me))
        .route(
            "/posts",
            get(handlers::post::list_posts).post(handlers::post::create_post),
        )
        .route(
            "/posts/:id",
            get(handlers::post::get_post)
                .put(handlers::post::update_post)
                .delete(handlers::post::delete_post),
        )
        .route("/posts/:id/view", get(handlers::post::post_view))
        .route("/posts/:id/react", put(handlers::post::react))
        .route(
            "/profiles/:name/posts",
            get(handlers::profile::profile_posts),
        )
        .route(
            "/profiles/:name/follow",
            get(handlers::profile::follow_state).put(handlers::profile::toggle_follow),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any) // The UI is served from elsewhere
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .with_state(state)
}

/// Opens (and creates if needed) the SQLite file backing the session store.
pub async fn connect_database(url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    Ok(pool)
}
