use catalog_api::{app, config, store::JsonStore};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up CATALOG_DATA_PATH, TOKEN, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting catalog API in {:?} mode", config.environment);

    // Probe the data file up front; requests will keep failing until it is
    // fixed, but the server still comes up so /health can report the state.
    let store = JsonStore::new(&config.catalog.data_path);
    if let Err(e) = store.check().await {
        tracing::warn!(
            path = %config.catalog.data_path,
            "catalog store is not readable at startup: {}",
            e
        );
    }

    let app = app();

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("catalog API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
