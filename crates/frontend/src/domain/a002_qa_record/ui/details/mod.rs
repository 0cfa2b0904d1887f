//! QA recording panel for the selected record.
//!
//! - model.rs: save/flag calls and input-length guards
//! - view_model.rs: edit session, commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::QaRecordPanel;
