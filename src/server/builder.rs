//! ServerBuilder for fluent API to build the dashboard server

use super::exposure::WebExposure;
use super::host::DashboardHost;
use crate::config::DashboardConfig;
use crate::core::events::EventBus;
use crate::core::session::{AuthProvider, InMemoryAuthProvider};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for the dashboard server
///
/// Without an explicit provider, sessions are served by an
/// [`InMemoryAuthProvider`] over the configured accounts. Without a
/// configuration, [`DashboardConfig::default_config`] is used.
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(DashboardConfig::from_yaml_file("dashboard.yaml")?)
///     .with_event_bus(64)
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: Option<DashboardConfig>,
    auth_provider: Option<Arc<dyn AuthProvider>>,
    custom_routes: Vec<Router>,
    event_bus: Option<EventBus>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            config: None,
            auth_provider: None,
            custom_routes: Vec::new(),
            event_bus: None,
        }
    }

    /// Set the configuration
    pub fn with_config(mut self, config: DashboardConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the session provider
    pub fn with_auth_provider(mut self, provider: impl AuthProvider + 'static) -> Self {
        self.auth_provider = Some(Arc::new(provider));
        self
    }

    /// Set a session provider the caller keeps a handle to
    ///
    /// Useful when the provider finishes loading after the server is built.
    pub fn with_shared_auth_provider(mut self, provider: Arc<dyn AuthProvider>) -> Self {
        self.auth_provider = Some(provider);
        self
    }

    /// Add custom routes to the server
    ///
    /// They are merged ahead of the page routes, so they take precedence
    /// over the catch-all page handler.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let reports = Router::new().route("/reports.csv", get(export_reports));
    ///
    /// ServerBuilder::new()
    ///     .with_custom_routes(reports)
    ///     .build()?;
    /// ```
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Enable the event bus for session notifications
    ///
    /// # Arguments
    ///
    /// * `capacity` - Buffer size for the broadcast channel
    pub fn with_event_bus(mut self, capacity: usize) -> Self {
        self.event_bus = Some(EventBus::new(capacity));
        self
    }

    /// Build the host
    pub fn build_host(mut self) -> Result<DashboardHost> {
        let config = self.config.take().unwrap_or_else(DashboardConfig::default_config);

        let auth = match self.auth_provider.take() {
            Some(provider) => provider,
            None => Arc::new(InMemoryAuthProvider::new(&config.accounts)),
        };

        let mut host = DashboardHost::from_builder_components(config, auth)?;

        if let Some(event_bus) = self.event_bus.take() {
            host = host.with_event_bus(event_bus);
        }

        Ok(host)
    }

    /// Build the final router, with request tracing
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        let app = WebExposure::build_router(host, custom_routes)?;

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the dashboard with graceful shutdown
    ///
    /// Binds to `server.bind` from the configuration and stops on SIGTERM
    /// or Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self
            .config
            .as_ref()
            .map(|config| config.server.bind.clone())
            .unwrap_or_else(|| DashboardConfig::default().server.bind);

        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SessionError;
    use crate::core::session::{SessionState, SignedIn};
    use async_trait::async_trait;

    struct NeverReady;

    #[async_trait]
    impl AuthProvider for NeverReady {
        async fn resolve(&self, _token: Option<&str>) -> Result<SessionState, SessionError> {
            Ok(SessionState::Loading)
        }

        async fn sign_in(&self, _email: &str, _password: &str) -> Result<SignedIn, SessionError> {
            Err(SessionError::NotReady)
        }

        async fn sign_out(&self, _token: &str) -> Result<(), SessionError> {
            Err(SessionError::NotReady)
        }
    }

    #[test]
    fn test_build_with_defaults() {
        let host = ServerBuilder::new().build_host().unwrap();
        assert_eq!(host.config.accounts[0].email, "demo@erp.local");
        assert!(host.event_bus().is_none());
    }

    #[test]
    fn test_build_with_event_bus() {
        let host = ServerBuilder::new().with_event_bus(16).build_host().unwrap();
        assert!(host.event_bus().is_some());
    }

    #[tokio::test]
    async fn test_custom_provider_is_used() {
        let host = ServerBuilder::new()
            .with_auth_provider(NeverReady)
            .build_host()
            .unwrap();

        let state = host.auth.resolve(None).await.unwrap();
        assert!(state.is_loading());
    }

    #[test]
    fn test_invalid_config_fails_build() {
        let mut config = DashboardConfig::default_config();
        config.session.cookie_name = String::new();

        assert!(ServerBuilder::new().with_config(config).build().is_err());
    }

    #[test]
    fn test_fluent_chaining_full_pipeline() {
        let result = ServerBuilder::new()
            .with_config(DashboardConfig::default_config())
            .with_event_bus(64)
            .with_custom_routes(Router::new())
            .build();
        assert!(result.is_ok());
    }
}
