pub mod backend;
pub mod draw;
