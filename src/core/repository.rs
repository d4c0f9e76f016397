use crate::core::{
    Deleted, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, PizzaChanges, PizzaRepository,
    Restaurant, RestaurantChanges, RestaurantPizza, RestaurantPizzaChanges,
    RestaurantPizzaRepository, RestaurantRepository, Store, Tables,
};
use crate::domain::projection::{self, PizzaSummary, RestaurantPizzaView, RestaurantView};
use crate::utils::error::{ModelError, Result};

const RESTAURANT: &str = "Restaurant";
const PIZZA: &str = "Pizza";
const RESTAURANT_PIZZA: &str = "RestaurantPizza";

/// Implements every repository port on top of a [`Store`].
pub struct Repository<S: Store> {
    store: S,
}

impl<S: Store> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn not_found(entity: &'static str, id: i64) -> ModelError {
    ModelError::NotFoundError { entity, id }
}

fn restaurant_in(tables: &Tables, id: i64) -> Result<&Restaurant> {
    tables.restaurants.get(id).ok_or_else(|| not_found(RESTAURANT, id))
}

fn pizza_in(tables: &Tables, id: i64) -> Result<&Pizza> {
    tables.pizzas.get(id).ok_or_else(|| not_found(PIZZA, id))
}

fn restaurant_pizza_in(tables: &Tables, id: i64) -> Result<&RestaurantPizza> {
    tables
        .restaurant_pizzas
        .get(id)
        .ok_or_else(|| not_found(RESTAURANT_PIZZA, id))
}

fn view_of(tables: &Tables, row: &RestaurantPizza) -> Result<RestaurantPizzaView> {
    let restaurant = restaurant_in(tables, row.restaurant_id)?;
    let pizza = pizza_in(tables, row.pizza_id)?;
    Ok(projection::restaurant_pizza(row, restaurant, pizza))
}

fn log_rejected(err: &ModelError, action: &str) {
    if err.is_validation() {
        tracing::warn!("Rejected {}: {}", action, err);
    }
}

impl<S: Store> RestaurantRepository for Repository<S> {
    fn create_restaurant(&self, new: NewRestaurant) -> Result<Restaurant> {
        let restaurant = self
            .store
            .transaction(|tables| Ok(tables.insert_restaurant(new)))?;

        tracing::info!("Created restaurant {} ({})", restaurant.id, restaurant.name);
        Ok(restaurant)
    }

    fn get_restaurant(&self, id: i64) -> Result<Restaurant> {
        self.store.read(|tables| restaurant_in(tables, id).cloned())
    }

    fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        self.store
            .read(|tables| Ok(tables.restaurants.iter().cloned().collect()))
    }

    fn update_restaurant(&self, id: i64, changes: RestaurantChanges) -> Result<Restaurant> {
        tracing::debug!("Updating restaurant {}: {:?}", id, changes);
        self.store.transaction(|tables| {
            let row = tables
                .restaurants
                .get_mut(id)
                .ok_or_else(|| not_found(RESTAURANT, id))?;
            changes.apply_to(row);
            Ok(row.clone())
        })
    }

    fn delete_restaurant(&self, id: i64) -> Result<Deleted> {
        let deleted = self.store.transaction(|tables| {
            restaurant_in(tables, id)?;
            let cascaded = tables
                .restaurant_pizzas
                .remove_where(|rp| rp.restaurant_id == id);
            tables.restaurants.remove(id);
            Ok(Deleted { id, cascaded })
        })?;

        tracing::info!(
            "Deleted restaurant {} and {} restaurant_pizzas",
            id,
            deleted.cascaded
        );
        Ok(deleted)
    }

    fn serialize_restaurant(&self, id: i64) -> Result<RestaurantView> {
        self.store.read(|tables| {
            let restaurant = restaurant_in(tables, id)?;
            let offerings = tables
                .restaurant_pizzas
                .iter()
                .filter(|rp| rp.restaurant_id == id)
                .map(|rp| pizza_in(tables, rp.pizza_id).map(|pizza| (rp, pizza)))
                .collect::<Result<Vec<_>>>()?;
            Ok(projection::restaurant(restaurant, offerings))
        })
    }
}

impl<S: Store> PizzaRepository for Repository<S> {
    fn create_pizza(&self, new: NewPizza) -> Result<Pizza> {
        let pizza = self
            .store
            .transaction(|tables| Ok(tables.insert_pizza(new)))?;

        tracing::info!("Created pizza {} ({})", pizza.id, pizza.name);
        Ok(pizza)
    }

    fn get_pizza(&self, id: i64) -> Result<Pizza> {
        self.store.read(|tables| pizza_in(tables, id).cloned())
    }

    fn list_pizzas(&self) -> Result<Vec<Pizza>> {
        self.store
            .read(|tables| Ok(tables.pizzas.iter().cloned().collect()))
    }

    fn update_pizza(&self, id: i64, changes: PizzaChanges) -> Result<Pizza> {
        tracing::debug!("Updating pizza {}: {:?}", id, changes);
        self.store.transaction(|tables| {
            let row = tables
                .pizzas
                .get_mut(id)
                .ok_or_else(|| not_found(PIZZA, id))?;
            changes.apply_to(row);
            Ok(row.clone())
        })
    }

    fn delete_pizza(&self, id: i64) -> Result<Deleted> {
        let deleted = self.store.transaction(|tables| {
            pizza_in(tables, id)?;
            let cascaded = tables.restaurant_pizzas.remove_where(|rp| rp.pizza_id == id);
            tables.pizzas.remove(id);
            Ok(Deleted { id, cascaded })
        })?;

        tracing::info!(
            "Deleted pizza {} and {} restaurant_pizzas",
            id,
            deleted.cascaded
        );
        Ok(deleted)
    }

    fn serialize_pizza(&self, id: i64) -> Result<PizzaSummary> {
        self.store
            .read(|tables| pizza_in(tables, id).map(projection::pizza))
    }
}

impl<S: Store> RestaurantPizzaRepository for Repository<S> {
    fn create_restaurant_pizza(&self, new: NewRestaurantPizza) -> Result<RestaurantPizza> {
        let row = self
            .store
            .transaction(|tables| tables.insert_restaurant_pizza(new))
            .inspect_err(|e| log_rejected(e, "restaurant_pizza"))?;

        tracing::info!(
            "Created restaurant_pizza {} (restaurant {}, pizza {}, price {})",
            row.id,
            row.restaurant_id,
            row.pizza_id,
            row.price
        );
        Ok(row)
    }

    fn get_restaurant_pizza(&self, id: i64) -> Result<RestaurantPizza> {
        self.store
            .read(|tables| restaurant_pizza_in(tables, id).cloned())
    }

    fn list_restaurant_pizzas(&self) -> Result<Vec<RestaurantPizza>> {
        self.store
            .read(|tables| Ok(tables.restaurant_pizzas.iter().cloned().collect()))
    }

    fn restaurant_pizzas_of_restaurant(&self, restaurant_id: i64) -> Result<Vec<RestaurantPizza>> {
        self.store.read(|tables| {
            restaurant_in(tables, restaurant_id)?;
            Ok(tables
                .restaurant_pizzas
                .iter()
                .filter(|rp| rp.restaurant_id == restaurant_id)
                .cloned()
                .collect())
        })
    }

    fn restaurant_pizzas_of_pizza(&self, pizza_id: i64) -> Result<Vec<RestaurantPizza>> {
        self.store.read(|tables| {
            pizza_in(tables, pizza_id)?;
            Ok(tables
                .restaurant_pizzas
                .iter()
                .filter(|rp| rp.pizza_id == pizza_id)
                .cloned()
                .collect())
        })
    }

    fn update_restaurant_pizza(
        &self,
        id: i64,
        changes: RestaurantPizzaChanges,
    ) -> Result<RestaurantPizza> {
        tracing::debug!("Updating restaurant_pizza {}: {:?}", id, changes);
        self.store
            .transaction(|tables| {
                let mut row = restaurant_pizza_in(tables, id)?.clone();
                changes.apply_to(&mut row)?;
                tables.check_references(row.restaurant_id, row.pizza_id)?;

                let stored = tables
                    .restaurant_pizzas
                    .get_mut(id)
                    .ok_or_else(|| not_found(RESTAURANT_PIZZA, id))?;
                *stored = row.clone();
                Ok(row)
            })
            .inspect_err(|e| log_rejected(e, "restaurant_pizza update"))
    }

    fn delete_restaurant_pizza(&self, id: i64) -> Result<()> {
        self.store.transaction(|tables| {
            tables
                .restaurant_pizzas
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| not_found(RESTAURANT_PIZZA, id))
        })?;

        tracing::info!("Deleted restaurant_pizza {}", id);
        Ok(())
    }

    fn serialize_restaurant_pizza(&self, id: i64) -> Result<RestaurantPizzaView> {
        self.store
            .read(|tables| view_of(tables, restaurant_pizza_in(tables, id)?))
    }
}
