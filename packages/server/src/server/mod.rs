//! HTTP server: configuration, router, and route handlers.

pub mod app;
pub mod config;
pub mod routes;

pub use app::build_app;
pub use config::Config;
