pub mod page;
pub mod query;
pub mod requests;
pub mod serde_utils;
