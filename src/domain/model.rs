use crate::utils::error::{ModelError, Result};
use crate::utils::validation::validate_range;
use serde::{Deserialize, Serialize};

pub const MIN_PRICE: i64 = 1;
pub const MAX_PRICE: i64 = 30;

/// Price of a pizza at a restaurant. Always within `MIN_PRICE..=MAX_PRICE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Price(i64);

impl Price {
    pub fn new(value: i64) -> Result<Self> {
        validate_range("price", value, MIN_PRICE, MAX_PRICE)?;
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Price {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self> {
        Price::new(value)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

/// A pizza offered at a restaurant at a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: Price,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

/// Unvalidated input; `price` is checked when the row is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantChanges {
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaChanges {
    pub name: Option<String>,
    pub ingredients: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPizzaChanges {
    pub price: Option<i64>,
    pub restaurant_id: Option<i64>,
    pub pizza_id: Option<i64>,
}

impl RestaurantChanges {
    pub fn apply_to(self, restaurant: &mut Restaurant) {
        if let Some(name) = self.name {
            restaurant.name = name;
        }
        if let Some(address) = self.address {
            restaurant.address = address;
        }
    }
}

impl PizzaChanges {
    pub fn apply_to(self, pizza: &mut Pizza) {
        if let Some(name) = self.name {
            pizza.name = name;
        }
        if let Some(ingredients) = self.ingredients {
            pizza.ingredients = ingredients;
        }
    }
}

impl RestaurantPizzaChanges {
    /// Checks every field first and only then writes, so a rejected
    /// price leaves the foreign keys untouched too.
    pub fn apply_to(self, row: &mut RestaurantPizza) -> Result<()> {
        let price = self.price.map(Price::new).transpose()?;

        if let Some(price) = price {
            row.price = price;
        }
        if let Some(restaurant_id) = self.restaurant_id {
            row.restaurant_id = restaurant_id;
        }
        if let Some(pizza_id) = self.pizza_id {
            row.pizza_id = pizza_id;
        }
        Ok(())
    }
}
