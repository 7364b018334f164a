pub mod request_id;

use axum::{
    extract::{DefaultBodyLimit, Request},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, webhook::WebhookController};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with all routes and layers
pub fn create_router(webhook_controller: Arc<WebhookController>) -> Router {
    let webhook_routes = Router::new()
        .route("/webhook/miniflux", post(WebhookController::handle_miniflux))
        // Miniflux batches carry full HTML content and have no upper size
        .layer(DefaultBodyLimit::disable())
        .with_state(webhook_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(webhook_routes)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                    // Path only: the query string carries the destination webhook token
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path()
                    )
                })),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    webhook_controller: Arc<WebhookController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(webhook_controller);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Server listening on {}", local_addr);
    tracing::info!(
        "Webhook endpoint: http://{}/webhook/miniflux?webhook_url=YOUR_FEISHU_WEBHOOK_URL",
        local_addr
    );
    tracing::info!("Health check endpoint: http://{}/health", local_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
