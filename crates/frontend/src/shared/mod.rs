pub mod api_utils;
pub mod badges;
pub mod busy;
pub mod chart;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod edit_session;
pub mod http;
pub mod icons;
pub mod link_utils;
pub mod page_frame;
pub mod pagination;
pub mod record_browser;
pub mod request_seq;
