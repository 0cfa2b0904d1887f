pub mod bar_chart;
pub mod date_range_picker;
pub mod enum_select;
pub mod filter_panel;
pub mod name_multi_select;
pub mod pagination_controls;
