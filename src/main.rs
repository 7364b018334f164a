use miniflux_feishu_relay::controllers::webhook::WebhookController;
use miniflux_feishu_relay::domain::notification::NotificationService;
use miniflux_feishu_relay::infrastructure::config::{Config, LogFormat};
use miniflux_feishu_relay::infrastructure::feishu::FeishuClient;
use miniflux_feishu_relay::infrastructure::http::start_http_server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        send_timeout_secs = config.send_timeout_secs,
        "Starting Miniflux-Feishu relay on {}",
        config.bind_address()
    );

    // === DEPENDENCY INJECTION SETUP ===
    let feishu_client = Arc::new(FeishuClient::new(config.send_timeout())?);
    let notification_service = Arc::new(NotificationService::new(feishu_client));
    let webhook_controller = Arc::new(WebhookController::new(notification_service));

    start_http_server(Arc::new(config), webhook_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "miniflux_feishu_relay=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
