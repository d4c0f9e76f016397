use anyhow::Context;
use clap::Parser;
use pizza_restaurants::config::Backend;
use pizza_restaurants::core::{NewPizza, NewRestaurant, NewRestaurantPizza, RestaurantPizzaChanges};
use pizza_restaurants::domain::projection::RestaurantSummary;
use pizza_restaurants::domain::schema;
use pizza_restaurants::utils::error::ErrorCategory;
use pizza_restaurants::utils::{logger, validation::Validate};
use pizza_restaurants::{
    CliConfig, Command, InMemoryStore, JsonFileStore, ModelError, PizzaRepository, Repository,
    RestaurantPizzaRepository, RestaurantRepository, SeedData, Store, TomlConfig,
};
use serde::Serialize;

fn main() {
    let config = CliConfig::parse();

    let file_config = match config.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file_config) => file_config.unwrap_or_default(),
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            std::process::exit(exit_code(&e));
        }
    };

    if file_config.json_logs() {
        logger::init_json_logger(config.verbose, file_config.log_level());
    } else {
        logger::init_cli_logger(config.verbose, file_config.log_level());
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate().and_then(|_| file_config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(exit_code(&e));
    }

    let database = match (config.database.as_deref(), file_config.database.backend) {
        (Some(path), _) => Some(path),
        (None, Backend::File) => file_config.database_path(),
        (None, Backend::Memory) => None,
    };

    let result = match database {
        Some(path) => {
            let store = JsonFileStore::new(path);
            tracing::info!("Using JSON database {}", store.path().display());
            run(Repository::new(store), &config, &file_config)
        }
        None => run(Repository::new(InMemoryStore::new()), &config, &file_config),
    };

    if let Err(e) = result {
        let code = e
            .downcast_ref::<ModelError>()
            .map(exit_code)
            .unwrap_or(1);
        tracing::error!("❌ Command failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(code);
    }
}

fn exit_code(e: &ModelError) -> i32 {
    match e.category() {
        ErrorCategory::Validation => 2,
        ErrorCategory::NotFound => 3,
        ErrorCategory::Integrity => 4,
        ErrorCategory::Configuration => 5,
        ErrorCategory::Storage => 1,
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run<S: Store>(
    repo: Repository<S>,
    config: &CliConfig,
    file_config: &TomlConfig,
) -> anyhow::Result<()> {
    if let Some(path) = config.seed.as_deref().or(file_config.seed_path()) {
        let seed = SeedData::from_file(path).with_context(|| format!("loading seed {}", path))?;
        seed.apply(repo.store())?;
    }

    match &config.command {
        Command::Restaurants => {
            let summaries: Vec<RestaurantSummary> = repo
                .list_restaurants()?
                .iter()
                .map(RestaurantSummary::from)
                .collect();
            print_json(&summaries)
        }
        Command::Restaurant { id } => print_json(&repo.serialize_restaurant(*id)?),
        Command::DeleteRestaurant { id } => {
            let deleted = repo.delete_restaurant(*id)?;
            println!(
                "Deleted restaurant {} ({} restaurant_pizzas removed)",
                deleted.id, deleted.cascaded
            );
            Ok(())
        }
        Command::Pizzas => {
            let pizzas = repo
                .list_pizzas()?
                .iter()
                .map(pizza_restaurants::domain::projection::pizza)
                .collect::<Vec<_>>();
            print_json(&pizzas)
        }
        Command::CreateRestaurant { name, address } => {
            let restaurant = repo.create_restaurant(NewRestaurant {
                name: name.clone(),
                address: address.clone(),
            })?;
            print_json(&repo.serialize_restaurant(restaurant.id)?)
        }
        Command::CreatePizza { name, ingredients } => {
            let pizza = repo.create_pizza(NewPizza {
                name: name.clone(),
                ingredients: ingredients.clone(),
            })?;
            print_json(&repo.serialize_pizza(pizza.id)?)
        }
        Command::AddRestaurantPizza {
            price,
            restaurant_id,
            pizza_id,
        } => {
            let row = repo.create_restaurant_pizza(NewRestaurantPizza {
                price: *price,
                restaurant_id: *restaurant_id,
                pizza_id: *pizza_id,
            })?;
            print_json(&repo.serialize_restaurant_pizza(row.id)?)
        }
        Command::UpdatePrice { id, price } => {
            let row = repo.update_restaurant_pizza(
                *id,
                RestaurantPizzaChanges {
                    price: Some(*price),
                    ..Default::default()
                },
            )?;
            print_json(&repo.serialize_restaurant_pizza(row.id)?)
        }
        Command::DeleteRestaurantPizza { id } => {
            repo.delete_restaurant_pizza(*id)?;
            println!("Deleted restaurant_pizza {}", id);
            Ok(())
        }
        Command::Schema => {
            for statement in schema::create_table_statements() {
                println!("{};", statement);
            }
            Ok(())
        }
    }
}
