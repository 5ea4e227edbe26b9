pub mod api;
pub mod app;
pub mod busy;
pub mod components;
pub mod utils;
