pub mod aggregate;
pub mod filter;

pub use aggregate::QaRecord;
pub use filter::{QaQuery, QaQueryFilter};
