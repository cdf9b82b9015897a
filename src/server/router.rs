//! Route table of the dashboard
//!
//! Page routes are a fixed, ordered list of exact paths. Resolution is a
//! pure function from path to [`PageId`]; every path outside the table
//! resolves to [`PageId::Unmapped`], which renders the placeholder view.

use crate::server::handlers::{AppState, render_page, sign_in, sign_out};
use axum::{Router, routing::post};

/// Identifies the page rendered for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Dashboard,
    Invoices,
    Orders,
    Challans,
    Proforma,
    Customers,
    Products,
    Company,
    Settings,
    /// Any path outside the route table
    Unmapped,
}

/// Ordered path → page mapping
pub const ROUTES: &[(&str, PageId)] = &[
    ("/", PageId::Dashboard),
    ("/invoices", PageId::Invoices),
    ("/orders", PageId::Orders),
    ("/challans", PageId::Challans),
    ("/proforma", PageId::Proforma),
    ("/customers", PageId::Customers),
    ("/products", PageId::Products),
    ("/company", PageId::Company),
    ("/settings", PageId::Settings),
];

impl PageId {
    /// Name used in navigation and placeholder text
    pub fn name(&self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard",
            PageId::Invoices => "Invoices",
            PageId::Orders => "Orders",
            PageId::Challans => "Challans",
            PageId::Proforma => "Proforma",
            PageId::Customers => "Customers",
            PageId::Products => "Products",
            PageId::Company => "Company",
            PageId::Settings => "Settings",
            PageId::Unmapped => "This",
        }
    }

    /// Title of the page in the browser tab
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Unmapped => "Coming soon",
            _ => self.name(),
        }
    }

    /// Check if this page only shows "coming soon" content
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, PageId::Dashboard | PageId::Invoices | PageId::Orders)
    }

    /// The path this page is mounted on (none for unmapped paths)
    pub fn path(&self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|(_, page)| page == self)
            .map(|(path, _)| *path)
    }
}

/// Resolve a request path to the page rendered for it
pub fn resolve(path: &str) -> PageId {
    let page = ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, page)| *page)
        .unwrap_or(PageId::Unmapped);

    tracing::debug!(path, page = ?page, "resolved route");
    page
}

/// Build the dashboard routes
///
/// - POST /auth/sign-in - Open a session from the sign-in form
/// - POST /auth/sign-out - End the current session
/// - Everything else - Session gate, then the page for the path
pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/auth/sign-in", post(sign_in))
        .route("/auth/sign-out", post(sign_out))
        .fallback(render_page)
        .with_state(state)
}
