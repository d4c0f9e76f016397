use crate::domain::model::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, PizzaChanges, Restaurant,
    RestaurantChanges, RestaurantPizza, RestaurantPizzaChanges,
};
use crate::domain::projection::{PizzaSummary, RestaurantPizzaView, RestaurantView};
use crate::domain::tables::Tables;
use crate::utils::error::Result;

/// Persistence backend. Each call is one transaction: the closure's
/// writes become visible only when it returns `Ok`.
pub trait Store: Send + Sync {
    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Tables) -> Result<T>;

    fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Tables) -> Result<T>;
}

/// Outcome of deleting a parent row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deleted {
    pub id: i64,
    pub cascaded: usize,
}

pub trait RestaurantRepository {
    fn create_restaurant(&self, new: NewRestaurant) -> Result<Restaurant>;
    fn get_restaurant(&self, id: i64) -> Result<Restaurant>;
    fn list_restaurants(&self) -> Result<Vec<Restaurant>>;
    fn update_restaurant(&self, id: i64, changes: RestaurantChanges) -> Result<Restaurant>;
    /// Removes the restaurant and every association pointing at it.
    fn delete_restaurant(&self, id: i64) -> Result<Deleted>;
    fn serialize_restaurant(&self, id: i64) -> Result<RestaurantView>;
}

pub trait PizzaRepository {
    fn create_pizza(&self, new: NewPizza) -> Result<Pizza>;
    fn get_pizza(&self, id: i64) -> Result<Pizza>;
    fn list_pizzas(&self) -> Result<Vec<Pizza>>;
    fn update_pizza(&self, id: i64, changes: PizzaChanges) -> Result<Pizza>;
    /// Removes the pizza and every association pointing at it.
    fn delete_pizza(&self, id: i64) -> Result<Deleted>;
    fn serialize_pizza(&self, id: i64) -> Result<PizzaSummary>;
}

pub trait RestaurantPizzaRepository {
    fn create_restaurant_pizza(&self, new: NewRestaurantPizza) -> Result<RestaurantPizza>;
    fn get_restaurant_pizza(&self, id: i64) -> Result<RestaurantPizza>;
    fn list_restaurant_pizzas(&self) -> Result<Vec<RestaurantPizza>>;
    fn restaurant_pizzas_of_restaurant(&self, restaurant_id: i64) -> Result<Vec<RestaurantPizza>>;
    fn restaurant_pizzas_of_pizza(&self, pizza_id: i64) -> Result<Vec<RestaurantPizza>>;
    fn update_restaurant_pizza(
        &self,
        id: i64,
        changes: RestaurantPizzaChanges,
    ) -> Result<RestaurantPizza>;
    fn delete_restaurant_pizza(&self, id: i64) -> Result<()>;
    fn serialize_restaurant_pizza(&self, id: i64) -> Result<RestaurantPizzaView>;
}
