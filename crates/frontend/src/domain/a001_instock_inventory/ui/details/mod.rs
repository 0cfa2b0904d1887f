//! Inventory item edit modal.
//!
//! - model.rs: save call and input parsing
//! - view_model.rs: edit session, commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::InstockDetails;
