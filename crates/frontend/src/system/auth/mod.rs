pub mod api;
pub mod context;
pub mod guard;
pub mod password;
pub mod storage;
