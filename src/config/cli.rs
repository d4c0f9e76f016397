use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "pizza-restaurants")]
#[command(about = "Restaurants, pizzas and what they cost where")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "JSON database file (overrides the configured backend)")]
    pub database: Option<String>,

    #[arg(long, help = "TOML seed file loaded before the command runs")]
    pub seed: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List restaurants (id, name, address)
    Restaurants,
    /// Show one restaurant with its pizzas
    Restaurant { id: i64 },
    /// Delete a restaurant and its restaurant_pizzas
    DeleteRestaurant { id: i64 },
    /// List pizzas
    Pizzas,
    CreateRestaurant {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
    },
    CreatePizza {
        #[arg(long)]
        name: String,
        #[arg(long)]
        ingredients: String,
    },
    /// Offer a pizza at a restaurant
    AddRestaurantPizza {
        #[arg(long, allow_negative_numbers = true)]
        price: i64,
        #[arg(long)]
        restaurant_id: i64,
        #[arg(long)]
        pizza_id: i64,
    },
    UpdatePrice {
        id: i64,
        #[arg(allow_negative_numbers = true)]
        price: i64,
    },
    DeleteRestaurantPizza { id: i64 },
    /// Print CREATE TABLE statements
    Schema,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("--config", path)?;
        }
        if let Some(path) = &self.database {
            validate_path("--database", path)?;
        }
        if let Some(path) = &self.seed {
            validate_path("--seed", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    #[test]
    fn test_parse_add_restaurant_pizza() {
        let config = CliConfig::parse_from([
            "pizza-restaurants",
            "--database",
            "./data/pizza.json",
            "add-restaurant-pizza",
            "--price",
            "12",
            "--restaurant-id",
            "1",
            "--pizza-id",
            "2",
        ]);

        assert_eq!(config.database.as_deref(), Some("./data/pizza.json"));
        assert!(config.validate().is_ok());
        match config.command {
            Command::AddRestaurantPizza {
                price,
                restaurant_id,
                pizza_id,
            } => assert_eq!((price, restaurant_id, pizza_id), (12, 1, 2)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_empty_path_is_a_config_error() {
        let config = CliConfig::parse_from(["pizza-restaurants", "--seed", "", "pizzas"]);
        let err = config.validate().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_update_price_accepts_negative_values() {
        let config = CliConfig::try_parse_from(["pizza-restaurants", "update-price", "1", "-5"])
            .unwrap();
        match config.command {
            Command::UpdatePrice { id, price } => assert_eq!((id, price), (1, -5)),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
