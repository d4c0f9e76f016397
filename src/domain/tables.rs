use crate::domain::model::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Price, Restaurant, RestaurantPizza,
};
use crate::domain::schema::{self, ForeignKey};
use crate::utils::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rows keyed by surrogate id. Ids increase and are never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table<T> {
    last_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    /// Assigns the next free id. A loaded table whose `last_id` lags behind
    /// its rows still gets an id above every existing key.
    pub fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> &T {
        let max_key = self.rows.keys().next_back().copied().unwrap_or(0);
        let id = self.last_id.max(max_key) + 1;
        self.last_id = id;
        self.rows.entry(id).or_insert(build(id))
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn remove(&mut self, id: i64) -> Option<T> {
        self.rows.remove(&id)
    }

    /// Rows in id order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Removes every row matching `pred`, returning how many went.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, row| !pred(row));
        before - self.rows.len()
    }
}

/// The relational state a [`Store`](crate::domain::ports::Store) persists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tables {
    pub restaurants: Table<Restaurant>,
    pub pizzas: Table<Pizza>,
    pub restaurant_pizzas: Table<RestaurantPizza>,
}

impl Tables {
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty() && self.pizzas.is_empty() && self.restaurant_pizzas.is_empty()
    }

    pub fn insert_restaurant(&mut self, new: NewRestaurant) -> Restaurant {
        self.restaurants
            .insert_with(|id| Restaurant {
                id,
                name: new.name,
                address: new.address,
            })
            .clone()
    }

    pub fn insert_pizza(&mut self, new: NewPizza) -> Pizza {
        self.pizzas
            .insert_with(|id| Pizza {
                id,
                name: new.name,
                ingredients: new.ingredients,
            })
            .clone()
    }

    /// Price is checked before the foreign keys.
    pub fn insert_restaurant_pizza(&mut self, new: NewRestaurantPizza) -> Result<RestaurantPizza> {
        let price = Price::new(new.price)?;
        self.check_references(new.restaurant_id, new.pizza_id)?;
        Ok(self
            .restaurant_pizzas
            .insert_with(|id| RestaurantPizza {
                id,
                price,
                restaurant_id: new.restaurant_id,
                pizza_id: new.pizza_id,
            })
            .clone())
    }

    /// Foreign-key check for a `restaurant_pizzas` row.
    pub fn check_references(&self, restaurant_id: i64, pizza_id: i64) -> Result<()> {
        check_fk(
            &schema::RESTAURANT_PIZZAS_RESTAURANT_FK,
            restaurant_id,
            self.restaurants.contains(restaurant_id),
        )?;
        check_fk(
            &schema::RESTAURANT_PIZZAS_PIZZA_FK,
            pizza_id,
            self.pizzas.contains(pizza_id),
        )
    }
}

fn check_fk(fk: &ForeignKey, value: i64, exists: bool) -> Result<()> {
    if exists {
        Ok(())
    } else {
        Err(ModelError::ForeignKeyError {
            constraint: fk.name(),
            value,
        })
    }
}
