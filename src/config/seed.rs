//! Seed data in TOML. Associations name their restaurant and pizza
//! instead of using ids, since ids are assigned on insert.

use crate::core::{NewPizza, NewRestaurant, NewRestaurantPizza, Store};
use crate::utils::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub restaurants: Vec<NewRestaurant>,
    #[serde(default)]
    pub pizzas: Vec<NewPizza>,
    #[serde(default)]
    pub restaurant_pizzas: Vec<SeedRestaurantPizza>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRestaurantPizza {
    pub restaurant: String,
    pub pizza: String,
    pub price: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

impl SeedData {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Inserts everything in one transaction, and only into an empty
    /// store. Returns `None` when the store already holds data; a rejected
    /// row leaves the store untouched.
    pub fn apply<S: Store>(&self, store: &S) -> Result<Option<SeedReport>> {
        let report = store.transaction(|tables| {
            if !tables.is_empty() {
                return Ok(None);
            }

            let mut restaurant_ids = HashMap::new();
            for restaurant in &self.restaurants {
                let created = tables.insert_restaurant(restaurant.clone());
                restaurant_ids.insert(created.name, created.id);
            }

            let mut pizza_ids = HashMap::new();
            for pizza in &self.pizzas {
                let created = tables.insert_pizza(pizza.clone());
                pizza_ids.insert(created.name, created.id);
            }

            for offering in &self.restaurant_pizzas {
                let restaurant_id = lookup(&restaurant_ids, "restaurant", &offering.restaurant)?;
                let pizza_id = lookup(&pizza_ids, "pizza", &offering.pizza)?;
                tables.insert_restaurant_pizza(NewRestaurantPizza {
                    price: offering.price,
                    restaurant_id,
                    pizza_id,
                })?;
            }

            Ok(Some(SeedReport {
                restaurants: self.restaurants.len(),
                pizzas: self.pizzas.len(),
                restaurant_pizzas: self.restaurant_pizzas.len(),
            }))
        })?;

        match &report {
            Some(report) => tracing::info!("Seeded {:?}", report),
            None => tracing::info!("Store already has data, skipping seed"),
        }
        Ok(report)
    }
}

fn lookup(ids: &HashMap<String, i64>, kind: &str, name: &str) -> Result<i64> {
    ids.get(name).copied().ok_or_else(|| ModelError::ConfigError {
        message: format!("seed references unknown {} '{}'", kind, name),
    })
}
