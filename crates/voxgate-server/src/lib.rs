mod cors;
mod health;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use voxgate_config::Config;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if subsystem initialization (TTS, STT) fails,
    /// including voice catalog validation
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

        let tts_state = tts::build_server(config)?;
        let stt_state = stt::build_server(config)?;

        // Build base router with feature routes
        let mut app = Router::new();

        // Health check reports the catalog languages when TTS is up
        if config.server.health.enabled {
            let supported_languages = tts_state
                .as_ref()
                .map(|state| state.supported_languages())
                .unwrap_or_default();
            let state = health::HealthState {
                supported_languages: Arc::new(supported_languages),
            };
            app = app.route(
                &config.server.health.path,
                axum::routing::get(health::health_handler).with_state(state),
            );
        }

        // TTS routes
        if let Some(tts_state) = tts_state {
            app = app.merge(tts::endpoint_router().with_state(tts_state));
        }

        // STT routes
        if let Some(stt_state) = stt_state {
            app = app.merge(stt::endpoint_router().with_state(stt_state));
        }

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS
        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
