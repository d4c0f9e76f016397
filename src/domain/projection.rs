//! Response shapes for the API layer.
//!
//! A restaurant embeds its full list of associations, but each association
//! only carries [`RestaurantSummary`] / [`PizzaSummary`] for its parents.
//! Neither summary has a collection field, so a serialized restaurant
//! cannot nest back into itself.

use crate::domain::model::{Pizza, Restaurant, RestaurantPizza};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// Also the full serialization of a pizza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaSummary {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPizzaView {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub restaurant: RestaurantSummary,
    pub pizza: PizzaSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantView {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaView>,
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
        }
    }
}

impl From<&Pizza> for PizzaSummary {
    fn from(pizza: &Pizza) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name.clone(),
            ingredients: pizza.ingredients.clone(),
        }
    }
}

pub fn pizza(pizza: &Pizza) -> PizzaSummary {
    PizzaSummary::from(pizza)
}

/// `restaurant` and `pizza` must be the rows `row` points at.
pub fn restaurant_pizza(
    row: &RestaurantPizza,
    restaurant: &Restaurant,
    pizza: &Pizza,
) -> RestaurantPizzaView {
    debug_assert_eq!(row.restaurant_id, restaurant.id);
    debug_assert_eq!(row.pizza_id, pizza.id);

    RestaurantPizzaView {
        id: row.id,
        price: row.price.get(),
        pizza_id: row.pizza_id,
        restaurant_id: row.restaurant_id,
        restaurant: RestaurantSummary::from(restaurant),
        pizza: PizzaSummary::from(pizza),
    }
}

pub fn restaurant<'a, I>(restaurant: &Restaurant, offerings: I) -> RestaurantView
where
    I: IntoIterator<Item = (&'a RestaurantPizza, &'a Pizza)>,
{
    RestaurantView {
        id: restaurant.id,
        name: restaurant.name.clone(),
        address: restaurant.address.clone(),
        restaurant_pizzas: offerings
            .into_iter()
            .map(|(row, pizza)| restaurant_pizza(row, restaurant, pizza))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Price;

    fn fixtures() -> (Restaurant, Pizza, RestaurantPizza) {
        let restaurant = Restaurant {
            id: 1,
            name: "Dough Bros".to_string(),
            address: "1 Main St".to_string(),
        };
        let pizza = Pizza {
            id: 1,
            name: "Margherita".to_string(),
            ingredients: "tomato, mozzarella, basil".to_string(),
        };
        let row = RestaurantPizza {
            id: 1,
            price: Price::new(12).unwrap(),
            restaurant_id: 1,
            pizza_id: 1,
        };
        (restaurant, pizza, row)
    }

    #[test]
    fn test_restaurant_serialization_matches_wire_format() {
        let (r, p, rp) = fixtures();
        let view = restaurant(&r, [(&rp, &p)]);

        assert_eq!(
            serde_json::to_string(&view).unwrap(),
            r#"{"id":1,"name":"Dough Bros","address":"1 Main St","restaurant_pizzas":[{"id":1,"price":12,"pizza_id":1,"restaurant_id":1,"restaurant":{"id":1,"name":"Dough Bros","address":"1 Main St"},"pizza":{"id":1,"name":"Margherita","ingredients":"tomato, mozzarella, basil"}}]}"#
        );
    }

    #[test]
    fn test_pizza_has_no_associations() {
        let (_, p, _) = fixtures();
        let value = serde_json::to_value(pizza(&p)).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert!(value.get("restaurant_pizzas").is_none());
    }

    #[test]
    fn test_nested_restaurant_is_shallow() {
        let (r, p, rp) = fixtures();
        let value = serde_json::to_value(restaurant(&r, [(&rp, &p)])).unwrap();
        let nested = &value["restaurant_pizzas"][0]["restaurant"];

        assert_eq!(nested.as_object().unwrap().len(), 3);
        assert!(nested.get("restaurant_pizzas").is_none());
    }
}
