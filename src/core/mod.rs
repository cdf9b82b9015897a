//! Core module containing the session model, errors and shared traits

pub mod entity;
pub mod error;
pub mod events;
pub mod extractors;
pub mod session;

pub use entity::{CompanyScoped, LineItem, StatusBadge};
pub use error::{DashboardError, DashboardResult};
pub use events::{EventBus, EventEnvelope, SessionEvent};
pub use extractors::CurrentSession;
pub use session::{AuthProvider, InMemoryAuthProvider, SessionState, SignedIn};
