//! Traits shared by the dashboard's record types
//!
//! Records are declarative shapes: nothing here persists or validates them.
//! The traits only expose what the views need to render them uniformly.

use uuid::Uuid;

/// A record owned by a company.
///
/// Every reference record (customers, products, invoices, ...) is scoped to
/// the company that issued it.
pub trait CompanyScoped {
    /// The owning company
    fn company_id(&self) -> Uuid;

    /// Check whether this record belongs to the given company
    fn belongs_to(&self, company_id: &Uuid) -> bool {
        self.company_id() == *company_id
    }
}

/// A status enumeration that renders as a coloured badge.
pub trait StatusBadge: Copy + 'static {
    /// Every value of the enumeration, in display order
    fn all() -> &'static [Self];

    /// Wire form of the status (e.g. "in_transit")
    fn as_str(&self) -> &'static str;

    /// CSS class applied to the badge; distinct per status value
    fn badge_class(&self) -> &'static str;

    /// Human readable label: first letter upper-cased, underscores as spaces
    fn label(&self) -> String {
        capitalize(&self.as_str().replace('_', " "))
    }

    /// Parse the wire form back into a status
    fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|status| status.as_str() == s)
    }
}

/// A single product quantity/price entry within a document.
pub trait LineItem {
    /// The product this line refers to
    fn product_id(&self) -> Uuid;

    /// Number of units
    fn quantity(&self) -> u32;

    /// Price of one unit
    fn unit_price(&self) -> f64;

    /// quantity × unit price
    fn line_total(&self) -> f64 {
        f64::from(self.quantity()) * self.unit_price()
    }
}

/// Sum the line totals of a document's items
pub fn items_total<I: LineItem>(items: &[I]) -> f64 {
    items.iter().map(LineItem::line_total).sum()
}

/// Upper-case the first character of a string
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
