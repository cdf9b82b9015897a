//! Server-side views
//!
//! Pages render to HTML fragments; the layout shell then projects the
//! fragment into its content region. Templates are compiled into the binary
//! and rendered with Tera (auto-escaping is on for every `.html` template).

pub mod auth;
pub mod charts;
pub mod dashboard;
pub mod format;
pub mod invoices;
pub mod layout;
pub mod orders;
pub mod placeholder;

use crate::config::BrandingConfig;
use crate::core::error::{escape_html, RenderError};
use crate::server::router::PageId;
use layout::LayoutShell;
use serde::Serialize;
use tera::{Context, Tera};

const TEMPLATES: &[(&str, &str)] = &[
    ("styles.css", include_str!("../../templates/styles.css")),
    ("layout.html", include_str!("../../templates/layout.html")),
    ("loading.html", include_str!("../../templates/loading.html")),
    ("sign_in.html", include_str!("../../templates/sign_in.html")),
    ("dashboard.html", include_str!("../../templates/dashboard.html")),
    ("invoices.html", include_str!("../../templates/invoices.html")),
    ("orders.html", include_str!("../../templates/orders.html")),
    ("placeholder.html", include_str!("../../templates/placeholder.html")),
];

/// A headline figure shown above a table
#[derive(Debug, Clone, Serialize)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
    /// Colour of the figure
    pub tone: &'static str,
}

/// An inert per-row action button
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RowAction {
    pub name: &'static str,
    pub icon: &'static str,
    pub tone: &'static str,
}

/// Renders pages, the layout shell and the session-gate screens
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Compile the built-in templates
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())
            .map_err(|e| RenderError::Template {
                name: "built-in templates".to_string(),
                message: e.to_string(),
            })?;
        tera.set_escape_fn(escape_html);
        Ok(Self { tera })
    }

    /// Render a template from any serializable view
    pub fn render<T: Serialize>(&self, name: &str, view: &T) -> Result<String, RenderError> {
        let context = Context::from_serialize(view).map_err(|e| RenderError::from_tera(name, &e))?;
        self.render_context(name, &context)
    }

    fn render_context(&self, name: &str, context: &Context) -> Result<String, RenderError> {
        self.tera
            .render(name, context)
            .map_err(|e| RenderError::from_tera(name, &e))
    }

    /// Render the content fragment of a page
    pub fn render_page(&self, page: PageId, branding: &BrandingConfig) -> Result<String, RenderError> {
        match page {
            PageId::Dashboard => {
                self.render("dashboard.html", &dashboard::DashboardView::build(branding))
            }
            PageId::Invoices => self.render("invoices.html", &invoices::InvoicesView::build(branding)),
            PageId::Orders => self.render("orders.html", &orders::OrdersView::build(branding)),
            PageId::Challans
            | PageId::Proforma
            | PageId::Customers
            | PageId::Products
            | PageId::Company
            | PageId::Settings
            | PageId::Unmapped => self.render(
                "placeholder.html",
                &placeholder::PlaceholderView::for_page(page),
            ),
        }
    }

    /// Wrap a rendered page fragment in the layout shell
    pub fn render_shell(&self, shell: &LayoutShell, content: &str) -> Result<String, RenderError> {
        let mut context =
            Context::from_serialize(shell).map_err(|e| RenderError::from_tera("layout.html", &e))?;
        context.insert("content", content);
        self.render_context("layout.html", &context)
    }

    /// Render the indicator shown while the session is resolving
    pub fn render_loading(&self, view: &auth::LoadingView) -> Result<String, RenderError> {
        self.render("loading.html", view)
    }

    /// Render the sign-in form
    pub fn render_sign_in(&self, view: &auth::SignInView) -> Result<String, RenderError> {
        self.render("sign_in.html", view)
    }
}
