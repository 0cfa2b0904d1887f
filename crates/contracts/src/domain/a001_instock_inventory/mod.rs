pub mod aggregate;
pub mod filter;

pub use aggregate::{AuctionSelectionRequest, InstockInventory, ScrapedData};
pub use filter::{InstockQuery, InstockQueryFilter};
