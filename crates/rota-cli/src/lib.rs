//! Rota CLI - terminal front end for the route pipeline.

pub mod app;
pub mod command;
pub mod identity;
pub mod map;
pub mod render;

pub use app::{App, Flow};
pub use command::{parse_command, Command};
pub use identity::LocalIdentity;
pub use map::GeoJsonMap;
