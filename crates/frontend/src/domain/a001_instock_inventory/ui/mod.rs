pub mod auction;
pub mod details;
pub mod list;
