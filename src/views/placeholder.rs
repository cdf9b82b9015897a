//! "Coming soon" stand-in for pages that are not built yet

use crate::server::router::PageId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderView {
    pub title: &'static str,
    pub message: String,
}

impl PlaceholderView {
    pub fn for_page(page: PageId) -> Self {
        Self {
            title: page.title(),
            message: format!("{} page - Coming soon", page.name()),
        }
    }
}
