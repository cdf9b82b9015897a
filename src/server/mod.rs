//! Server module: host, exposure, routes and handlers of the dashboard

pub mod builder;
pub mod exposure;
pub mod handlers;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::WebExposure;
pub use handlers::AppState;
pub use host::DashboardHost;
pub use router::{PageId, ROUTES};
