//! TOML configuration for the catalog driver.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, FetchConfig};
