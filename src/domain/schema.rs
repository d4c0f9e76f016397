//! Relational layout of the three tables, with foreign keys named
//! `fk_<table>_<column>_<referenced_table>`.

use crate::domain::model::{MAX_PRICE, MIN_PRICE};

pub const RESTAURANTS: &str = "restaurants";
pub const PIZZAS: &str = "pizzas";
pub const RESTAURANT_PIZZAS: &str = "restaurant_pizzas";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub table: &'static str,
    pub column: &'static str,
    pub referenced_table: &'static str,
}

impl ForeignKey {
    pub fn name(&self) -> String {
        format!(
            "fk_{}_{}_{}",
            self.table, self.column, self.referenced_table
        )
    }
}

pub const RESTAURANT_PIZZAS_RESTAURANT_FK: ForeignKey = ForeignKey {
    table: RESTAURANT_PIZZAS,
    column: "restaurant_id",
    referenced_table: RESTAURANTS,
};

pub const RESTAURANT_PIZZAS_PIZZA_FK: ForeignKey = ForeignKey {
    table: RESTAURANT_PIZZAS,
    column: "pizza_id",
    referenced_table: PIZZAS,
};

pub fn foreign_keys() -> [ForeignKey; 2] {
    [RESTAURANT_PIZZAS_RESTAURANT_FK, RESTAURANT_PIZZAS_PIZZA_FK]
}

/// `CREATE TABLE` statements (SQLite dialect) for an SQL-backed store.
pub fn create_table_statements() -> Vec<String> {
    let fk_clause = |fk: &ForeignKey| {
        format!(
            "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} (id) ON DELETE CASCADE",
            fk.name(),
            fk.column,
            fk.referenced_table
        )
    };

    vec![
        format!(
            "CREATE TABLE {} (id INTEGER PRIMARY KEY, name VARCHAR, address VARCHAR)",
            RESTAURANTS
        ),
        format!(
            "CREATE TABLE {} (id INTEGER PRIMARY KEY, name VARCHAR, ingredients VARCHAR)",
            PIZZAS
        ),
        format!(
            "CREATE TABLE {} (id INTEGER PRIMARY KEY, \
             price INTEGER NOT NULL CHECK (price BETWEEN {} AND {}), \
             restaurant_id INTEGER NOT NULL, \
             pizza_id INTEGER NOT NULL, \
             {})",
            RESTAURANT_PIZZAS,
            MIN_PRICE,
            MAX_PRICE,
            foreign_keys()
                .iter()
                .map(fk_clause)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    ]
}
