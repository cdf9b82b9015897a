//! Invoices page

use crate::config::BrandingConfig;
use crate::core::entity::StatusBadge;
use crate::entities::InvoiceStatus;
use crate::views::format::{format_amount, format_count, format_date};
use crate::views::{RowAction, SummaryCard};
use serde::Serialize;

/// A row of the invoice listing
#[derive(Debug, Clone, Copy)]
pub struct SampleInvoice {
    pub id: &'static str,
    pub invoice_number: &'static str,
    pub customer_name: &'static str,
    pub invoice_date: &'static str,
    pub due_date: &'static str,
    pub status: InvoiceStatus,
    pub total_amount: f64,
}

pub const SAMPLE_INVOICES: &[SampleInvoice] = &[
    SampleInvoice {
        id: "1",
        invoice_number: "INV-2024-001",
        customer_name: "Acme Corporation",
        invoice_date: "2024-01-15",
        due_date: "2024-02-15",
        status: InvoiceStatus::Paid,
        total_amount: 15_750.0,
    },
    SampleInvoice {
        id: "2",
        invoice_number: "INV-2024-002",
        customer_name: "Tech Solutions Ltd",
        invoice_date: "2024-01-18",
        due_date: "2024-02-18",
        status: InvoiceStatus::Sent,
        total_amount: 8_900.0,
    },
    SampleInvoice {
        id: "3",
        invoice_number: "INV-2024-003",
        customer_name: "Global Industries",
        invoice_date: "2024-01-20",
        due_date: "2024-01-25",
        status: InvoiceStatus::Overdue,
        total_amount: 22_300.0,
    },
    SampleInvoice {
        id: "4",
        invoice_number: "INV-2024-004",
        customer_name: "StartUp Inc",
        invoice_date: "2024-01-22",
        due_date: "2024-02-22",
        status: InvoiceStatus::Draft,
        total_amount: 12_500.0,
    },
];

const ACTIONS: &[RowAction] = &[
    RowAction { name: "View", icon: "eye", tone: "blue" },
    RowAction { name: "Edit", icon: "edit", tone: "green" },
    RowAction { name: "Download", icon: "download", tone: "purple" },
    RowAction { name: "Send", icon: "send", tone: "blue" },
    RowAction { name: "Delete", icon: "trash", tone: "red" },
];

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceRow {
    pub id: &'static str,
    pub invoice_number: &'static str,
    pub customer_name: &'static str,
    pub invoice_date: String,
    pub due_date: String,
    pub amount: String,
    pub status: &'static str,
    pub status_label: String,
    pub badge_class: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoicesView {
    pub summary: Vec<SummaryCard>,
    pub rows: Vec<InvoiceRow>,
    pub actions: &'static [RowAction],
}

impl InvoicesView {
    pub fn build(branding: &BrandingConfig) -> Self {
        let symbol = branding.currency_symbol.as_str();

        let summary = vec![
            SummaryCard { label: "Total Invoices", value: format_count(124), tone: "gray" },
            SummaryCard { label: "Paid", value: format_amount(symbol, 432_450.0), tone: "green" },
            SummaryCard { label: "Pending", value: format_amount(symbol, 121_400.0), tone: "blue" },
            SummaryCard { label: "Overdue", value: format_amount(symbol, 22_300.0), tone: "red" },
        ];

        let rows = SAMPLE_INVOICES
            .iter()
            .map(|invoice| InvoiceRow {
                id: invoice.id,
                invoice_number: invoice.invoice_number,
                customer_name: invoice.customer_name,
                invoice_date: format_date(invoice.invoice_date),
                due_date: format_date(invoice.due_date),
                amount: format_amount(symbol, invoice.total_amount),
                status: invoice.status.as_str(),
                status_label: invoice.status.label(),
                badge_class: invoice.status.badge_class(),
            })
            .collect();

        Self {
            summary,
            rows,
            actions: ACTIONS,
        }
    }
}
