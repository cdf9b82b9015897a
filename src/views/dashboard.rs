//! Dashboard overview page

use crate::config::BrandingConfig;
use crate::views::charts::{self, Bar, BarChartLayout, DonutSegment};
use crate::views::format::{format_amount, format_count};
use serde::Serialize;

struct Stat {
    name: &'static str,
    value: u64,
    is_amount: bool,
    change: &'static str,
    icon: &'static str,
    tone: &'static str,
}

const STATS: &[Stat] = &[
    Stat { name: "Total Revenue", value: 432_000, is_amount: true, change: "+12.3%", icon: "dollar-sign", tone: "green" },
    Stat { name: "Total Orders", value: 1_240, is_amount: false, change: "+8.7%", icon: "shopping-cart", tone: "blue" },
    Stat { name: "Total Invoices", value: 2_845, is_amount: false, change: "+15.2%", icon: "file-text", tone: "purple" },
    Stat { name: "Active Customers", value: 384, is_amount: false, change: "+3.4%", icon: "users", tone: "indigo" },
];

/// Month, sales, order count
const MONTHLY_SALES: &[(&str, f64, u32)] = &[
    ("Jan", 45_000.0, 120),
    ("Feb", 52_000.0, 140),
    ("Mar", 48_000.0, 125),
    ("Apr", 61_000.0, 165),
    ("May", 55_000.0, 148),
    ("Jun", 67_000.0, 182),
];

const ORDER_STATUS: &[(&str, f64, &str)] = &[
    ("Completed", 68.0, "#10b981"),
    ("Pending", 25.0, "#f59e0b"),
    ("Cancelled", 7.0, "#ef4444"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTone {
    Success,
    Info,
    Warning,
}

struct Activity {
    action: &'static str,
    reference: &'static str,
    time: &'static str,
    tone: ActivityTone,
}

const RECENT_ACTIVITY: &[Activity] = &[
    Activity { action: "New invoice created", reference: "INV-2024-001", time: "2 hours ago", tone: ActivityTone::Success },
    Activity { action: "Order shipped", reference: "ORD-2024-045", time: "4 hours ago", tone: ActivityTone::Info },
    Activity { action: "Payment received", reference: "INV-2024-002", time: "6 hours ago", tone: ActivityTone::Success },
    Activity { action: "New customer added", reference: "CUST-2024-028", time: "1 day ago", tone: ActivityTone::Info },
    Activity { action: "Product stock updated", reference: "PROD-2024-156", time: "1 day ago", tone: ActivityTone::Warning },
];

const SALES_CHART_WIDTH: f64 = 560.0;
const SALES_CHART_HEIGHT: f64 = 300.0;
const DONUT_SIZE: f64 = 300.0;

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub name: &'static str,
    pub value: String,
    pub change: &'static str,
    pub icon: &'static str,
    pub tone: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityRow {
    pub action: &'static str,
    pub reference: &'static str,
    pub time: &'static str,
    pub tone: ActivityTone,
}

/// A sales bar with the month's order count for its tooltip
#[derive(Debug, Clone, Serialize)]
pub struct SalesBar {
    #[serde(flatten)]
    pub bar: Bar,
    pub orders: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub stats: Vec<StatCard>,
    pub sales_chart: BarChartLayout,
    pub sales_bars: Vec<SalesBar>,
    pub status_chart: Vec<DonutSegment>,
    pub donut_size: f64,
    pub activity: Vec<ActivityRow>,
}

impl DashboardView {
    pub fn build(branding: &BrandingConfig) -> Self {
        let symbol = branding.currency_symbol.as_str();

        let stats = STATS
            .iter()
            .map(|stat| StatCard {
                name: stat.name,
                value: if stat.is_amount {
                    format_amount(symbol, stat.value as f64)
                } else {
                    format_count(stat.value)
                },
                change: stat.change,
                icon: stat.icon,
                tone: stat.tone,
            })
            .collect();

        let sales: Vec<(&str, f64)> = MONTHLY_SALES
            .iter()
            .map(|(month, sales, _)| (*month, *sales))
            .collect();
        let sales_chart = charts::bar_chart(&sales, SALES_CHART_WIDTH, SALES_CHART_HEIGHT, 4, |v| {
            format_amount(symbol, v)
        });

        let sales_bars = sales_chart
            .bars
            .iter()
            .zip(MONTHLY_SALES)
            .map(|(bar, (_, _, orders))| SalesBar {
                bar: bar.clone(),
                orders: *orders,
            })
            .collect();

        let center = DONUT_SIZE / 2.0;
        let status_chart = charts::donut(ORDER_STATUS, center, center, 60.0, 100.0);

        let activity = RECENT_ACTIVITY
            .iter()
            .map(|a| ActivityRow {
                action: a.action,
                reference: a.reference,
                time: a.time,
                tone: a.tone,
            })
            .collect();

        Self {
            stats,
            sales_chart,
            sales_bars,
            status_chart,
            donut_size: DONUT_SIZE,
            activity,
        }
    }
}
