pub mod activity;
pub mod api;
pub mod constants;
pub mod draw_controller;
pub mod draw_session;
pub mod history;
pub mod navigation;
pub mod prize_rows;
pub mod settings;
pub mod shared_roulette;
pub mod spin;
pub mod validation;
pub mod view;
pub mod wheel_face;
