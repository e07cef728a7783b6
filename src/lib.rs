use axum::{middleware as axum_middleware, routing::get, Router};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod store;

use catalog::{CatalogService, ProductRepository};
use handlers::AppState;
use store::JsonStore;

/// Build the full application router from global config.
pub fn app() -> Router {
    let config = config::config();
    let store = JsonStore::new(&config.catalog.data_path);
    let service = CatalogService::new(ProductRepository::new(store));

    let mut router = Router::new()
        // Public
        .route("/ping", get(ping))
        .route("/health", get(health))
        .merge(product_routes(AppState::new(service)));

    if config.server.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
}

fn product_routes(state: AppState) -> Router {
    use axum::routing::{patch, post};
    use handlers::products;

    // Reads are public; everything else sits behind the shared-secret check
    let public = Router::new()
        .route("/products", get(products::get_all))
        .route("/products/:id", get(products::get_by_id));

    let protected = Router::new()
        .route("/products/search", get(products::search))
        .route("/products/consumer_price", get(products::consumer_price))
        .route("/products", post(products::create))
        .route(
            "/products/:id",
            axum::routing::put(products::update)
                .patch(products::patch)
                .delete(products::delete),
        )
        .route("/products/:id/name", patch(products::update_name))
        .route_layer(axum_middleware::from_fn(
            middleware::verify_token_middleware,
        ));

    public.merge(protected).with_state(state)
}

async fn ping() -> &'static str {
    "pong"
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();
    let store = JsonStore::new(&config::config().catalog.data_path);

    match store.check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "store": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "catalog store unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "store_error": e.to_string()
                }
            })),
        ),
    }
}
