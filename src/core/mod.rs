pub mod repository;

pub use crate::domain::model::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, PizzaChanges, Price, Restaurant,
    RestaurantChanges, RestaurantPizza, RestaurantPizzaChanges,
};
pub use crate::domain::ports::{
    Deleted, PizzaRepository, RestaurantPizzaRepository, RestaurantRepository, Store,
};
pub use crate::domain::tables::Tables;
pub use crate::utils::error::Result;
