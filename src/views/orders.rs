//! Orders page

use crate::config::BrandingConfig;
use crate::core::entity::StatusBadge;
use crate::entities::OrderStatus;
use crate::views::format::{format_amount, format_count, format_date};
use crate::views::{RowAction, SummaryCard};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct SampleOrder {
    pub id: &'static str,
    pub order_number: &'static str,
    pub customer_name: &'static str,
    pub order_date: &'static str,
    pub expected_delivery: &'static str,
    pub status: OrderStatus,
    pub total_amount: f64,
}

pub const SAMPLE_ORDERS: &[SampleOrder] = &[
    SampleOrder {
        id: "1",
        order_number: "ORD-2024-001",
        customer_name: "Acme Corporation",
        order_date: "2024-01-15",
        expected_delivery: "2024-01-25",
        status: OrderStatus::Confirmed,
        total_amount: 15_750.0,
    },
    SampleOrder {
        id: "2",
        order_number: "ORD-2024-002",
        customer_name: "Tech Solutions Ltd",
        order_date: "2024-01-18",
        expected_delivery: "2024-01-28",
        status: OrderStatus::Processing,
        total_amount: 8_900.0,
    },
    SampleOrder {
        id: "3",
        order_number: "ORD-2024-003",
        customer_name: "Global Industries",
        order_date: "2024-01-20",
        expected_delivery: "2024-01-30",
        status: OrderStatus::Shipped,
        total_amount: 22_300.0,
    },
    SampleOrder {
        id: "4",
        order_number: "ORD-2024-004",
        customer_name: "StartUp Inc",
        order_date: "2024-01-22",
        expected_delivery: "2024-02-01",
        status: OrderStatus::Pending,
        total_amount: 12_500.0,
    },
];

const ACTIONS: &[RowAction] = &[
    RowAction { name: "View", icon: "eye", tone: "blue" },
    RowAction { name: "Edit", icon: "edit", tone: "green" },
    RowAction { name: "Pack", icon: "package", tone: "purple" },
    RowAction { name: "Ship", icon: "truck", tone: "orange" },
];

#[derive(Debug, Clone, Serialize)]
pub struct OrderRow {
    pub id: &'static str,
    pub order_number: &'static str,
    pub customer_name: &'static str,
    pub order_date: String,
    pub expected_delivery: String,
    pub amount: String,
    pub status: &'static str,
    pub status_label: String,
    pub badge_class: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrdersView {
    pub summary: Vec<SummaryCard>,
    pub rows: Vec<OrderRow>,
    pub actions: &'static [RowAction],
}

impl OrdersView {
    pub fn build(branding: &BrandingConfig) -> Self {
        let symbol = branding.currency_symbol.as_str();

        let summary = vec![
            SummaryCard { label: "Total Orders", value: format_count(86), tone: "gray" },
            SummaryCard { label: "Pending", value: format_count(12), tone: "yellow" },
            SummaryCard { label: "Processing", value: format_count(24), tone: "purple" },
            SummaryCard { label: "Shipped", value: format_count(50), tone: "green" },
        ];

        let rows = SAMPLE_ORDERS
            .iter()
            .map(|order| OrderRow {
                id: order.id,
                order_number: order.order_number,
                customer_name: order.customer_name,
                order_date: format_date(order.order_date),
                expected_delivery: format_date(order.expected_delivery),
                amount: format_amount(symbol, order.total_amount),
                status: order.status.as_str(),
                status_label: order.status.label(),
                badge_class: order.status.badge_class(),
            })
            .collect();

        Self {
            summary,
            rows,
            actions: ACTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_rows() {
        let view = OrdersView::build(&BrandingConfig::default());

        let labels: Vec<&str> = view.rows.iter().map(|r| r.status_label.as_str()).collect();
        assert_eq!(labels, vec!["Confirmed", "Processing", "Shipped", "Pending"]);
        assert_eq!(view.rows[3].expected_delivery, "1/2/2024");
        assert_eq!(view.actions.iter().map(|a| a.name).collect::<Vec<_>>(), vec!["View", "Edit", "Pack", "Ship"]);
    }
}
