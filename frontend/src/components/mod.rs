pub mod config_select;

pub use config_select::ConfigSelect;
