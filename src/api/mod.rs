//! HTTP API server for the demo actions

pub mod cors;
pub mod demo;
pub mod documents;
pub mod extract;
pub mod health;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::Result;
use crate::config::{DEFAULT_CONTACT_EMAIL, DeploymentConfig, ServerConfig};
use crate::fixtures::FixtureSet;

/// Shared state for API handlers
///
/// Read-only for the lifetime of the server.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub deployment: DeploymentConfig,
    pub contact_email: String,
    pub fixtures: FixtureSet,
}

/// Configuration for building an API server
pub struct ApiServerBuilder {
    deployment: DeploymentConfig,
    contact_email: String,
    fixtures: FixtureSet,
    static_dir: Option<PathBuf>,
}

impl ApiServerBuilder {
    /// Create a new API server builder
    #[must_use]
    pub fn new(deployment: DeploymentConfig) -> Self {
        Self {
            deployment,
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            fixtures: FixtureSet::demo(),
            static_dir: None,
        }
    }

    /// Create a builder from loaded server configuration
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        Self::new(config.deployment)
            .contact_email(config.contact_email)
            .static_dir(config.static_dir)
    }

    /// Set the contact email published in the manifest
    #[must_use]
    pub fn contact_email(mut self, email: String) -> Self {
        self.contact_email = email;
        self
    }

    /// Replace the demo data served by the action endpoints
    #[must_use]
    pub fn fixtures(mut self, fixtures: FixtureSet) -> Self {
        self.fixtures = fixtures;
        self
    }

    /// Set the static files directory served for unmatched paths
    #[must_use]
    pub fn static_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.static_dir = dir;
        self
    }

    /// Build the API server
    #[must_use]
    pub fn build(self) -> ApiServer {
        let state = Arc::new(ApiState {
            deployment: self.deployment,
            contact_email: self.contact_email,
            fixtures: self.fixtures,
        });

        ApiServer {
            state,
            static_dir: self.static_dir,
        }
    }
}

/// API server
pub struct ApiServer {
    state: Arc<ApiState>,
    static_dir: Option<PathBuf>,
}

impl ApiServer {
    /// Build the router with all routes
    pub fn router(&self) -> Router {
        let mut router = Router::new()
            .merge(documents::router(self.state.clone()))
            .merge(demo::router(self.state.clone()))
            .merge(health::router());

        // Serve static files if configured
        if let Some(static_dir) = &self.static_dir {
            router = router.fallback_service(ServeDir::new(static_dir));
            tracing::info!(path = %static_dir.display(), "serving static files");
        }

        router.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(cors::cors_middleware)),
        )
    }

    /// Run the API server
    ///
    /// # Errors
    ///
    /// Returns error if server fails to bind or run
    pub async fn run(self) -> Result<()> {
        let port = self.state.deployment.port();
        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| crate::Error::Config(format!("failed to bind API server: {e}")))?;

        tracing::info!(
            port,
            domain = %self.state.deployment.domain(),
            "API server listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| crate::Error::Config(format!("API server error: {e}")))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
