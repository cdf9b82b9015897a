//! Browser-facing exposure of the dashboard
//!
//! Consumes a [`DashboardHost`] and produces an Axum `Router` serving HTML
//! pages, the session form endpoints and the health probes.

use super::super::host::DashboardHost;
use crate::server::router::build_routes;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;

/// Web (HTML) exposure implementation
pub struct WebExposure;

impl WebExposure {
    /// Build the router from a host
    ///
    /// Custom routes are merged before the page routes, whose fallback
    /// catches every remaining path.
    pub fn build_router(host: Arc<DashboardHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let mut app = Self::health_routes();

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.merge(build_routes(host.app_state())))
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "erp-dashboard"
        }))
    }
}
