pub mod app;
pub mod config;
pub mod error;
pub mod landing_page;
pub mod rate_limit;
pub mod setup;
