//! Wire contracts shared between the dashboard and the resale API.
//!
//! Everything here is plain data: records, enumerations, query filters and
//! the page request/response envelopes used by the list endpoints.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
