use pizza_restaurants::core::{
    NewPizza, NewRestaurant, NewRestaurantPizza, PizzaChanges, RestaurantChanges,
    RestaurantPizzaChanges,
};
use pizza_restaurants::{
    InMemoryStore, ModelError, PizzaRepository, Repository, RestaurantPizzaRepository,
    RestaurantRepository,
};

fn setup() -> (Repository<InMemoryStore>, i64, i64) {
    let repo = Repository::new(InMemoryStore::new());
    let restaurant = repo
        .create_restaurant(NewRestaurant {
            name: "Dough Bros".to_string(),
            address: "1 Main St".to_string(),
        })
        .unwrap();
    let pizza = repo
        .create_pizza(NewPizza {
            name: "Margherita".to_string(),
            ingredients: "tomato, mozzarella, basil".to_string(),
        })
        .unwrap();
    (repo, restaurant.id, pizza.id)
}

fn offer(repo: &Repository<InMemoryStore>, price: i64, restaurant_id: i64, pizza_id: i64) -> Result<i64, ModelError> {
    repo.create_restaurant_pizza(NewRestaurantPizza {
        price,
        restaurant_id,
        pizza_id,
    })
    .map(|row| row.id)
}

#[test]
fn test_every_valid_price_is_accepted_on_create() {
    let (repo, restaurant_id, pizza_id) = setup();

    for price in 1..=30 {
        let id = offer(&repo, price, restaurant_id, pizza_id).unwrap();
        assert_eq!(repo.serialize_restaurant_pizza(id).unwrap().price, price);
    }
    assert_eq!(repo.list_restaurant_pizzas().unwrap().len(), 30);
}

#[test]
fn test_out_of_range_prices_are_rejected_on_create() {
    let (repo, restaurant_id, pizza_id) = setup();

    for price in [-100, -1, 0, 31, 32, 1000] {
        let err = offer(&repo, price, restaurant_id, pizza_id).unwrap_err();
        assert!(
            matches!(err, ModelError::ValidationError { ref field, .. } if field == "price"),
            "price {} gave {:?}",
            price,
            err
        );
    }
    assert!(repo.list_restaurant_pizzas().unwrap().is_empty());
}

#[test]
fn test_price_is_validated_on_every_update() {
    let (repo, restaurant_id, pizza_id) = setup();
    let id = offer(&repo, 12, restaurant_id, pizza_id).unwrap();

    for price in 1..=30 {
        let row = repo
            .update_restaurant_pizza(
                id,
                RestaurantPizzaChanges {
                    price: Some(price),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(row.price.get(), price);
    }

    for price in [0, 31] {
        let err = repo
            .update_restaurant_pizza(
                id,
                RestaurantPizzaChanges {
                    price: Some(price),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(repo.get_restaurant_pizza(id).unwrap().price.get(), 30);
    }
}

#[test]
fn test_rejected_update_applies_no_other_field() {
    let (repo, restaurant_id, pizza_id) = setup();
    let other = repo
        .create_restaurant(NewRestaurant {
            name: "Slice Town".to_string(),
            address: "9 Side Rd".to_string(),
        })
        .unwrap();
    let id = offer(&repo, 12, restaurant_id, pizza_id).unwrap();

    let err = repo
        .update_restaurant_pizza(
            id,
            RestaurantPizzaChanges {
                price: Some(31),
                restaurant_id: Some(other.id),
                pizza_id: None,
            },
        )
        .unwrap_err();

    assert!(err.is_validation());
    let row = repo.get_restaurant_pizza(id).unwrap();
    assert_eq!(row.restaurant_id, restaurant_id);
    assert_eq!(row.price.get(), 12);
}

#[test]
fn test_foreign_keys_are_enforced() {
    let (repo, restaurant_id, pizza_id) = setup();

    match offer(&repo, 10, 42, pizza_id) {
        Err(ModelError::ForeignKeyError { constraint, value }) => {
            assert_eq!(constraint, "fk_restaurant_pizzas_restaurant_id_restaurants");
            assert_eq!(value, 42);
        }
        other => panic!("unexpected: {:?}", other),
    }

    let id = offer(&repo, 10, restaurant_id, pizza_id).unwrap();
    let err = repo
        .update_restaurant_pizza(
            id,
            RestaurantPizzaChanges {
                pizza_id: Some(77),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, ModelError::ForeignKeyError { value: 77, .. }));
    assert_eq!(repo.get_restaurant_pizza(id).unwrap().pizza_id, pizza_id);
}

#[test]
fn test_delete_restaurant_cascades_only_its_associations() {
    let (repo, restaurant_id, pizza_id) = setup();
    let other = repo
        .create_restaurant(NewRestaurant {
            name: "Slice Town".to_string(),
            address: "9 Side Rd".to_string(),
        })
        .unwrap();

    for price in [5, 10, 15] {
        offer(&repo, price, restaurant_id, pizza_id).unwrap();
    }
    let kept = offer(&repo, 20, other.id, pizza_id).unwrap();

    let deleted = repo.delete_restaurant(restaurant_id).unwrap();
    assert_eq!(deleted.cascaded, 3);

    let remaining = repo.list_restaurant_pizzas().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept);
    assert!(matches!(
        repo.get_restaurant(restaurant_id),
        Err(ModelError::NotFoundError { .. })
    ));
    assert_eq!(repo.list_pizzas().unwrap().len(), 1);
}

#[test]
fn test_delete_pizza_cascades() {
    let (repo, restaurant_id, pizza_id) = setup();
    let pepperoni = repo
        .create_pizza(NewPizza {
            name: "Pepperoni".to_string(),
            ingredients: "tomato, mozzarella, pepperoni".to_string(),
        })
        .unwrap();
    offer(&repo, 11, restaurant_id, pizza_id).unwrap();
    offer(&repo, 13, restaurant_id, pepperoni.id).unwrap();

    let deleted = repo.delete_pizza(pizza_id).unwrap();
    assert_eq!(deleted.cascaded, 1);

    let view = repo.serialize_restaurant(restaurant_id).unwrap();
    assert_eq!(view.restaurant_pizzas.len(), 1);
    assert_eq!(view.restaurant_pizzas[0].pizza.name, "Pepperoni");
}

#[test]
fn test_delete_association_leaves_parents() {
    let (repo, restaurant_id, pizza_id) = setup();
    let id = offer(&repo, 8, restaurant_id, pizza_id).unwrap();

    repo.delete_restaurant_pizza(id).unwrap();

    assert!(repo.get_restaurant_pizza(id).is_err());
    assert!(repo.get_restaurant(restaurant_id).is_ok());
    assert!(repo.get_pizza(pizza_id).is_ok());
}

#[test]
fn test_update_parents_and_lookups() {
    let (repo, restaurant_id, pizza_id) = setup();
    offer(&repo, 8, restaurant_id, pizza_id).unwrap();

    let restaurant = repo
        .update_restaurant(
            restaurant_id,
            RestaurantChanges {
                address: Some("2 Main St".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(restaurant.name, "Dough Bros");
    assert_eq!(restaurant.address, "2 Main St");

    let pizza = repo
        .update_pizza(
            pizza_id,
            PizzaChanges {
                ingredients: Some("tomato, basil".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(pizza.ingredients, "tomato, basil");

    assert_eq!(repo.restaurant_pizzas_of_restaurant(restaurant_id).unwrap().len(), 1);
    assert_eq!(repo.restaurant_pizzas_of_pizza(pizza_id).unwrap().len(), 1);
    assert!(repo.restaurant_pizzas_of_pizza(99).is_err());

    let nested = repo.serialize_restaurant(restaurant_id).unwrap();
    assert_eq!(nested.restaurant_pizzas[0].restaurant.address, "2 Main St");
}
