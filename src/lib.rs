//! # ERP Dashboard
//!
//! A server-rendered business dashboard: a session gate in front of a
//! layout shell (side navigation, overlay navigation, top bar) and a fixed
//! set of pages for invoices, orders and sales figures.
//!
//! ## Features
//!
//! - **Session Gate**: loading indicator, sign-in form or the application,
//!   decided by an injected [`AuthProvider`](core::session::AuthProvider)
//! - **Route Table**: exact path matching to a closed set of pages, with a
//!   "coming soon" placeholder for everything else
//! - **Server-Side Charts**: SVG bar and donut charts computed in Rust
//! - **Session Events**: sign-in and sign-out changes broadcast on an
//!   optional event bus
//! - **Configuration-Based**: branding, cookie and demo accounts via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use erp::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_config(DashboardConfig::default_config())
//!         .with_event_bus(64)
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod views;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{DashboardError, DashboardResult},
        events::{EventBus, EventEnvelope, SessionEvent},
        session::{AuthProvider, InMemoryAuthProvider, SessionState, SignedIn},
    };

    // === Records ===
    pub use crate::entities::{Invoice, InvoiceStatus, Order, OrderStatus, Role, User};

    // === Config ===
    pub use crate::config::{AccountConfig, BrandingConfig, DashboardConfig, SessionConfig};

    // === Server ===
    pub use crate::server::{DashboardHost, PageId, ServerBuilder, WebExposure};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use uuid::Uuid;
}
