//! Delivery challans
//!
//! A challan accompanies goods in transit. It lists quantities only; prices
//! stay on the invoice.

use crate::core::entity::{CompanyScoped, LineItem, StatusBadge};
use crate::entities::company::{Customer, Product};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallanStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
}

impl StatusBadge for ChallanStatus {
    fn all() -> &'static [Self] {
        &[
            ChallanStatus::Pending,
            ChallanStatus::InTransit,
            ChallanStatus::Delivered,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ChallanStatus::Pending => "pending",
            ChallanStatus::InTransit => "in_transit",
            ChallanStatus::Delivered => "delivered",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            ChallanStatus::Pending => "badge-pending",
            ChallanStatus::InTransit => "badge-in-transit",
            ChallanStatus::Delivered => "badge-delivered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challan {
    pub id: Uuid,
    pub company_id: Uuid,
    pub customer_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Uuid>,
    pub challan_number: String,
    pub challan_date: NaiveDate,
    pub status: ChallanStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub items: Vec<ChallanItem>,
}

impl Challan {
    /// Total number of units shipped under this challan
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

impl CompanyScoped for Challan {
    fn company_id(&self) -> Uuid {
        self.company_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallanItem {
    pub id: Uuid,
    pub challan_id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

impl LineItem for ChallanItem {
    fn product_id(&self) -> Uuid {
        self.product_id
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    // Challans carry no prices.
    fn unit_price(&self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_transit_label() {
        assert_eq!(ChallanStatus::InTransit.label(), "In transit");
        assert_eq!(ChallanStatus::parse("in_transit"), Some(ChallanStatus::InTransit));
    }

    #[test]
    fn test_total_quantity_and_zero_line_total() {
        let challan_id = Uuid::new_v4();
        let challan = Challan {
            id: challan_id,
            company_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            order_id: None,
            challan_number: "DC-2024-001".to_string(),
            challan_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            status: ChallanStatus::InTransit,
            notes: None,
            created_at: Utc::now(),
            customer: None,
            items: vec![
                ChallanItem {
                    id: Uuid::new_v4(),
                    challan_id,
                    product_id: Uuid::new_v4(),
                    quantity: 12,
                    product: None,
                },
                ChallanItem {
                    id: Uuid::new_v4(),
                    challan_id,
                    product_id: Uuid::new_v4(),
                    quantity: 3,
                    product: None,
                },
            ],
        };

        assert_eq!(challan.total_quantity(), 15);
        assert_eq!(challan.items[0].line_total(), 0.0);
    }
}
