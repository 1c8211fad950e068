pub mod app;
pub mod application;
pub mod build_info;
pub mod error;
