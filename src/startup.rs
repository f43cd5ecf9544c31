//! Application startup and lifecycle management.

use crate::config::AppConfig;
use crate::handlers::app::{health_check, index, readiness_check};
use crate::handlers::generate::generate;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use axum::{routing::get, Router};
use secrecy::{ExposeSecret, Secret};
use sha2::{Digest, Sha512};
use std::sync::Arc;
use time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::Key, Expiry, MemoryStore, SessionManagerLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub text_provider: Arc<dyn TextProvider>,
}

pub fn build_router(state: AppState, session_secret: &Secret<String>) -> Router {
    // Session setup. The cookie-signing key wants 64 bytes, so the configured
    // secret is stretched through a digest; short dev secrets stay usable.
    let digest = Sha512::digest(session_secret.expose_secret().as_bytes());
    let signing_key = Key::from(digest.as_slice());

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_signed(signing_key)
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)));

    Router::new()
        .route("/", get(index).post(generate))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
    session_secret: Secret<String>,
}

impl Application {
    /// Build the application with the real Gemini provider.
    pub async fn build(config: AppConfig) -> anyhow::Result<Self> {
        let gemini_config = GeminiConfig {
            api_key: config.gemini.api_key.clone(),
            model: config.gemini.model.clone(),
            timeout: std::time::Duration::from_secs(config.gemini.timeout_secs),
        };
        let text_provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

        tracing::info!(
            model = %config.gemini.model,
            "Initialized Gemini text provider"
        );

        Self::with_provider(config, text_provider).await
    }

    /// Build the application with an injected provider (tests use a mock).
    pub async fn with_provider(
        config: AppConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> anyhow::Result<Self> {
        // Bind the listener (port 0 = random port for testing)
        let address = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
        })?;
        let port = listener.local_addr()?.port();

        let state = AppState { text_provider };

        Ok(Self {
            port,
            listener,
            state,
            session_secret: config.server.session_secret,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state, &self.session_secret);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
