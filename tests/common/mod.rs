use creative_agent::config::{AppConfig, GeminiSettings, ServerConfig};
use creative_agent::services::providers::mock::{MockReply, MockTextProvider};
use creative_agent::startup::Application;
use secrecy::Secret;
use std::sync::Arc;

/// Valid model output matching the documented creative-output shape.
#[allow(dead_code)]
pub const VALID_OUTPUT: &str = r#"{"summary":"س","insights":["a","b","c"],"creative_script":"ك","social_captions":["1","2","3"]}"#;

pub struct TestApp {
    pub address: String,
    pub provider: Arc<MockTextProvider>,
}

impl TestApp {
    /// Spawn the app with a mock provider that returns a valid creative output.
    #[allow(dead_code)]
    pub async fn spawn() -> Self {
        Self::spawn_with(MockReply::Text(VALID_OUTPUT.to_string())).await
    }

    /// Spawn the app on a random port with the given scripted provider reply.
    #[allow(dead_code)]
    pub async fn spawn_with(reply: MockReply) -> Self {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                session_secret: Secret::new("test-secret".to_string()),
            },
            gemini: GeminiSettings {
                api_key: Secret::new("test-api-key".to_string()),
                model: "gemini-2.5-flash".to_string(),
                timeout_secs: 5,
            },
        };

        let provider = Arc::new(MockTextProvider::replying(reply));

        let app = Application::with_provider(config, provider.clone())
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, provider }
    }
}
