//! Server host holding the dashboard state
//!
//! The host is built once by the [`ServerBuilder`](super::ServerBuilder) and
//! handed to an exposure, which turns it into a router. It is the single
//! owner of the configuration, the session provider, the compiled templates
//! and the event bus.

use crate::config::DashboardConfig;
use crate::core::events::EventBus;
use crate::core::session::AuthProvider;
use crate::server::handlers::AppState;
use crate::views::Renderer;
use anyhow::Result;
use std::sync::Arc;

/// Host context containing all dashboard state
///
/// # Example
///
/// ```rust,ignore
/// let host = DashboardHost::from_builder_components(config, provider)?
///     .with_event_bus(EventBus::new(64));
/// let app = WebExposure::build_router(Arc::new(host), vec![])?;
/// ```
pub struct DashboardHost {
    /// Validated configuration
    pub config: Arc<DashboardConfig>,

    /// Session provider
    pub auth: Arc<dyn AuthProvider>,

    /// Compiled templates
    pub renderer: Arc<Renderer>,

    /// Optional event bus notified of session changes
    pub event_bus: Option<Arc<EventBus>>,
}

impl DashboardHost {
    /// Build the host from builder components
    ///
    /// Fails if the configuration is invalid or a template does not compile.
    pub fn from_builder_components(config: DashboardConfig, auth: Arc<dyn AuthProvider>) -> Result<Self> {
        config.validate()?;
        let renderer = Renderer::new()?;

        Ok(Self {
            config: Arc::new(config),
            auth,
            renderer: Arc::new(renderer),
            event_bus: None,
        })
    }

    /// Set the event bus for session notifications
    pub fn with_event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(Arc::new(event_bus));
        self
    }

    /// Get a reference to the event bus (if configured)
    pub fn event_bus(&self) -> Option<&Arc<EventBus>> {
        self.event_bus.as_ref()
    }

    /// State shared by the request handlers
    pub fn app_state(&self) -> AppState {
        AppState {
            config: self.config.clone(),
            auth: self.auth.clone(),
            renderer: self.renderer.clone(),
            event_bus: self.event_bus.clone(),
        }
    }
}
