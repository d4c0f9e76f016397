#[cfg(feature = "cli")]
pub mod cli;
pub mod seed;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use seed::SeedData;
pub use toml_config::{Backend, TomlConfig};
