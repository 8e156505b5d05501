pub mod error;
pub mod geocode;
pub mod insights;
pub mod loader;
pub mod models;
pub mod resolver;
