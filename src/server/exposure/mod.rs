//! Exposures turning a [`DashboardHost`](super::DashboardHost) into a router

pub mod web;

pub use web::WebExposure;
