use std::sync::Arc;

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use storefront_content_api::config;
use storefront_content_api::facade::memory::{MemoryContent, StoreRegistry};
use storefront_content_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up CONTENT_API_PORT, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting storefront content API in {:?} mode", config.environment);

    let state = AppState::new(
        Arc::new(MemoryContent::new(&config.content.public_base_url)),
        Arc::new(StoreRegistry::from_config(&config.content)),
    );
    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("CONTENT_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("storefront content API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}

fn app(state: AppState) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Storefront reads
        .merge(content_read_routes())
        // Externally gated writes
        .merge(content_private_routes());

    if config::config().security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

fn content_read_routes() -> Router<AppState> {
    use storefront_content_api::handlers::public::content;

    Router::new()
        .route("/api/v1/content/pages", get(content::pages_list))
        .route("/api/v1/content/pages/:code", get(content::page_get))
        .route("/api/v1/content/summary", get(content::summary_list))
        .route("/api/v1/content/boxes", get(content::boxes_list))
        .route("/api/v1/content/boxes/:code", get(content::box_get))
        .route("/api/v1/content/folder", get(content::folder_get))
        // Store identified by path segment, resolved inline
        .route("/api/v1/:store_code/content/images", get(content::store_images_get))
        .route("/api/v1/:store_code/content/:code", get(content::store_box_get))
}

fn content_private_routes() -> Router<AppState> {
    use axum::routing::post;
    use storefront_content_api::handlers::private::content;

    Router::new()
        .route(
            "/api/v1/private/content",
            post(content::upload).delete(content::asset_delete),
        )
        .route("/api/v1/private/files", post(content::upload_many))
        // The page code segment is optional; when present it overrides the
        // code carried in the body
        .route("/api/v1/private/content/page", post(content::page_save))
        .route("/api/v1/private/content/page/:page_code", post(content::page_save))
        .layer(DefaultBodyLimit::max(config::config().server.max_upload_bytes))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Storefront Content API",
            "version": version,
            "description": "Content management HTTP API for a multi-tenant e-commerce storefront",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "pages": "/api/v1/content/pages[/:code] (public)",
                "boxes": "/api/v1/content/boxes[/:code], /api/v1/content/summary (public)",
                "folder": "/api/v1/content/folder?path= (public)",
                "store_scoped": "/api/v1/:storeCode/content/images, /api/v1/:storeCode/content/:code (public)",
                "uploads": "/api/v1/private/content, /api/v1/private/files (gated)",
                "page_upsert": "/api/v1/private/content/page[/:pageCode] (gated)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": now
        }
    }))
}
