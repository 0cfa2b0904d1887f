pub mod center;

pub use center::{view_label, ActiveView, Center, VIEW_INVENTORY, VIEW_QA_RECORDS};
