//! Invoices and their line items

use crate::core::entity::{CompanyScoped, LineItem, StatusBadge, items_total};
use crate::entities::company::{Customer, Product};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl StatusBadge for InvoiceStatus {
    fn all() -> &'static [Self] {
        &[
            InvoiceStatus::Draft,
            InvoiceStatus::Sent,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "badge-draft",
            InvoiceStatus::Sent => "badge-sent",
            InvoiceStatus::Paid => "badge-paid",
            InvoiceStatus::Overdue => "badge-overdue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub company_id: Uuid,
    pub customer_id: Uuid,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Sum of the line totals (independent of the stored subtotal)
    pub fn items_subtotal(&self) -> f64 {
        items_total(&self.items)
    }
}

impl CompanyScoped for Invoice {
    fn company_id(&self) -> Uuid {
        self.company_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

impl LineItem for InvoiceItem {
    fn product_id(&self) -> Uuid {
        self.product_id
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn unit_price(&self) -> f64 {
        self.unit_price
    }
}
