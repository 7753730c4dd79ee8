//! Mapbox provider for the rota route pipeline.

pub mod client;
pub mod config;
pub mod types;

pub use client::MapboxClient;
pub use config::{ConfigError, MapboxConfig};
