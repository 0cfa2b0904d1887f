pub mod details;
pub mod image_gallery;
pub mod list;
pub mod problem_panel;
pub mod scrape_card;
