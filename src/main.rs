use auth::SessionStore;
use social_core::config::DEFAULT_API_URL;
use social_core::ApiConfig;
use social_feed::app;
use social_feed::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Log initialized");

    let api_key = std::env::var("SOCIAL_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        anyhow::bail!("SOCIAL_API_KEY environment variable is not set");
    }
    let api_url = std::env::var("SOCIAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    tracing::info!("Using social API at {}", api_url);

    // Initialize Session Database
    let database_url = std::env::var("SESSION_DB_URL")
        .unwrap_or_else(|_| "sqlite:session.db".to_string());
    tracing::info!("Connecting to session database: {}", database_url);

    let session_db = social_feed::connect_database(&database_url).await?;
    kvstore::migrate(&session_db).await?;

    let http_client = reqwest::Client::builder()
        .user_agent(concat!("social-feed/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let app_state = AppState {
        api: ApiConfig::new(api_url, api_key),
        http_client,
        session: SessionStore::new(Arc::new(kvstore::SqliteStore::new(session_db))),
    };

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("Social feed server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
