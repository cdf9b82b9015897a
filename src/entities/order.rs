//! Customer orders and their line items

use crate::core::entity::{CompanyScoped, LineItem, StatusBadge, items_total};
use crate::entities::company::{Customer, Product};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
}

impl StatusBadge for OrderStatus {
    fn all() -> &'static [Self] {
        &[
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge-pending",
            OrderStatus::Confirmed => "badge-confirmed",
            OrderStatus::Processing => "badge-processing",
            OrderStatus::Shipped => "badge-shipped",
            OrderStatus::Delivered => "badge-delivered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub company_id: Uuid,
    pub customer_id: Uuid,
    pub order_number: String,
    pub order_date: NaiveDate,
    pub expected_delivery: NaiveDate,
    pub status: OrderStatus,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn items_subtotal(&self) -> f64 {
        items_total(&self.items)
    }
}

impl CompanyScoped for Order {
    fn company_id(&self) -> Uuid {
        self.company_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

impl LineItem for OrderItem {
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
