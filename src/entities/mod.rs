//! Record types of the dashboard
//!
//! These describe a relational schema (users, companies, customers,
//! products and the three document kinds with their line items). They are
//! plain serde shapes: no lifecycle is implemented for them.

pub mod challan;
pub mod company;
pub mod invoice;
pub mod order;
pub mod user;

pub use challan::{Challan, ChallanItem, ChallanStatus};
pub use company::{Company, Customer, Product};
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus};
pub use order::{Order, OrderItem, OrderStatus};
pub use user::{Role, User};
