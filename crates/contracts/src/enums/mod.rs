pub mod condition;
pub mod platform;
pub mod stock_status;

pub use condition::Condition;
pub use platform::{Marketplace, Platform};
pub use stock_status::StockStatus;
