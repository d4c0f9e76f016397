pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{InMemoryStore, JsonFileStore};
pub use config::{SeedData, TomlConfig};
pub use crate::core::repository::Repository;
pub use crate::core::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository, Store};
pub use utils::error::{ModelError, Result};
