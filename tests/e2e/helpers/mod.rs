use miniflux_feishu_relay::{
    controllers::webhook::WebhookController,
    domain::notification::NotificationService,
    infrastructure::{feishu::FeishuClient, http::create_router},
};
use std::sync::Arc;
use std::time::Duration;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod api_client;

use api_client::TestClient;
use fake_feishu::FakeFeishu;

pub struct TestContext {
    pub client: TestClient,
    pub feishu: FakeFeishu,
}

impl TestContext {
    /// Path of the relay endpoint pointed at the fake Feishu bot
    pub fn webhook_path(&self) -> String {
        format!(
            "/webhook/miniflux?webhook_url={}",
            urlencoding::encode(&self.feishu.url())
        )
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let feishu = FakeFeishu::start().await;

            // Wire the app the same way main does
            let feishu_client = Arc::new(
                FeishuClient::new(Duration::from_secs(5)).expect("Failed to build Feishu client"),
            );
            let notification_service = Arc::new(NotificationService::new(feishu_client));
            let webhook_controller = Arc::new(WebhookController::new(notification_service));
            let app = create_router(webhook_controller);

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                client: TestClient::new(&base_url),
                feishu,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Servers stop with the test runtime
        }
    }
}
