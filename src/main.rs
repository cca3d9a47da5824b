use std::{sync::Arc, time::Duration};

use movielog::{AppState, catalog::CatalogClient, config::Config, db, router, store::MovieStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movielog=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let http = reqwest::Client::builder()
        .user_agent("movielog/0.1")
        .timeout(Duration::from_secs(30))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let store = MovieStore::new(db);

    let catalog = Arc::new(CatalogClient::new(
        http,
        config.tmdb_api_key.clone(),
        config.tmdb_base_url.clone(),
    ));

    let state = Arc::new(AppState { config: config.clone(), store, catalog });

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
