//! Layout shell: side navigation, mobile overlay navigation and top bar
//!
//! The shell wraps an already rendered page fragment. Navigation highlighting
//! is an exact match between the request path and an entry's href, so at
//! most one entry is active.

use crate::config::BrandingConfig;
use crate::entities::User;
use serde::Serialize;

/// Query value that opens the overlay navigation (`?menu=open`)
pub const MENU_OPEN: &str = "open";

/// A static navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

/// Navigation entries in display order
pub const NAVIGATION: &[NavEntry] = &[
    NavEntry { name: "Dashboard", href: "/", icon: "layout-dashboard" },
    NavEntry { name: "Invoices", href: "/invoices", icon: "file-text" },
    NavEntry { name: "Orders", href: "/orders", icon: "shopping-cart" },
    NavEntry { name: "Challans", href: "/challans", icon: "truck" },
    NavEntry { name: "Proforma", href: "/proforma", icon: "receipt" },
    NavEntry { name: "Customers", href: "/customers", icon: "users" },
    NavEntry { name: "Products", href: "/products", icon: "package" },
    NavEntry { name: "Company", href: "/company", icon: "building" },
    NavEntry { name: "Settings", href: "/settings", icon: "settings" },
];

/// A navigation entry as rendered for one request
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Navigation items with the entry matching `current_path` marked active
pub fn nav_items(current_path: &str) -> Vec<NavItem> {
    NAVIGATION
        .iter()
        .map(|entry| NavItem {
            name: entry.name,
            href: entry.href,
            icon: entry.icon,
            active: entry.href == current_path,
        })
        .collect()
}

/// Template context of the layout shell
#[derive(Debug, Clone, Serialize)]
pub struct LayoutShell {
    pub app_name: String,
    pub page_title: String,
    pub current_path: String,
    pub nav: Vec<NavItem>,
    /// Whether the narrow-viewport overlay navigation is shown
    pub menu_open: bool,
    /// Link opening the overlay on the current page
    pub menu_href: String,
    pub user_name: String,
    pub user_email: String,
}

impl LayoutShell {
    pub fn new(
        branding: &BrandingConfig,
        user: &User,
        current_path: &str,
        page_title: &str,
        menu_open: bool,
    ) -> Self {
        Self {
            app_name: branding.app_name.clone(),
            page_title: page_title.to_string(),
            current_path: current_path.to_string(),
            nav: nav_items(current_path),
            menu_open,
            menu_href: format!("{}?menu={}", current_path, MENU_OPEN),
            user_name: user.display_name().to_string(),
            user_email: user.email.clone(),
        }
    }

    /// The active navigation entry, if the path is in the navigation
    pub fn active_entry(&self) -> Option<&NavItem> {
        self.nav.iter().find(|item| item.active)
    }
}
