pub mod use_page_data;

pub use use_page_data::*;
