//! Shared test utilities for Olive Branch.
//!
//! This module provides an in-memory store, raw row builders, and sample records
//! with sensible defaults.

use crate::{
    config::database::create_tables,
    errors::{Error, Result},
    models::{AdminConfig, BreakfastItem, Item, Order, User},
    store::{Row, Sheet, SheetStore, TableStore},
};
use chrono::{NaiveDate, NaiveDateTime};

/// Creates a sheet store over an in-memory `SQLite` database with tables initialized.
/// This is the standard setup for all store-backed tests.
pub async fn setup_test_store() -> Result<SheetStore> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    create_tables(&db).await?;
    Ok(SheetStore::new(db))
}

/// A store whose every operation fails, for checking that errors leave state untouched.
pub struct FailingStore;

impl TableStore for FailingStore {
    async fn get_all_rows(&self, sheet: Sheet) -> Result<Vec<Row>> {
        Err(Error::Store {
            message: format!("cannot read {sheet}"),
        })
    }

    async fn append_row(&self, sheet: Sheet, _values: Vec<String>, _insert_at_top: bool) -> Result<()> {
        Err(Error::Store {
            message: format!("cannot write {sheet}"),
        })
    }
}

/// Naive local timestamp from its parts.
///
/// # Panics
/// Panics on an invalid date or time; test inputs are literals.
#[allow(clippy::unwrap_used)]
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

fn row(cells: &[(&str, &str)]) -> Row {
    cells
        .iter()
        .map(|(column, value)| ((*column).to_string(), (*value).to_string()))
        .collect()
}

/// Raw `users` row with empty contact details and no flags.
pub fn user_row(nick_name: &str, first_name: &str, last_name: &str) -> Row {
    row(&[
        ("nick_name", nick_name),
        ("first_name", first_name),
        ("last_name", last_name),
        ("phone_number", ""),
        ("email", ""),
        ("address", ""),
        ("volunteer", "no"),
        ("away", "no"),
        ("diet", "Meat"),
        ("allergies", ""),
    ])
}

/// Raw `items` row.
pub fn item_row(name: &str, price: &str, tax_category: &str) -> Row {
    row(&[
        ("name", name),
        ("price", price),
        ("description", ""),
        ("tax_category", tax_category),
    ])
}

/// Raw `orders` row for one unit at 2.0.
pub fn order_row(order_id: &str, nick_name: &str, time: &str, item: &str) -> Row {
    row(&[
        ("order_id", order_id),
        ("user_nick_name", nick_name),
        ("time", time),
        ("item", item),
        ("quantity", "1"),
        ("price", "2"),
        ("total", "2"),
        ("receiver", ""),
        ("diet", ""),
        ("allergies", ""),
        ("served", ""),
        ("tax_category", "Miscellaneous"),
        ("comment", ""),
    ])
}

/// A non-volunteer user eating meat.
pub fn sample_user(nick_name: &str, first_name: &str, last_name: &str) -> User {
    User {
        nick_name: nick_name.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: String::new(),
        phone_number: String::new(),
        address: String::new(),
        volunteer: false,
        away: false,
        diet: "Meat".to_string(),
        allergies: String::new(),
    }
}

/// One unit of coffee priced at `total`, placed 2024-05-01 12:00.
pub fn sample_order(order_id: &str, nick_name: &str, total: f64) -> Order {
    Order {
        order_id: order_id.to_string(),
        user_nick_name: nick_name.to_string(),
        time: Some(at(2024, 5, 1, 12, 0, 0)),
        item: "Coffee".to_string(),
        quantity: 1.0,
        price: total,
        total,
        receiver: String::new(),
        diet: String::new(),
        allergies: String::new(),
        served: String::new(),
        tax_category: "Miscellaneous".to_string(),
        comment: String::new(),
    }
}

/// A sign-up order (`item` is the sign-up label) for `receiver` with `diet`.
pub fn signup_order(order_id: &str, item: &str, time: NaiveDateTime, receiver: &str, diet: &str) -> Order {
    Order {
        item: item.to_string(),
        time: Some(time),
        receiver: receiver.to_string(),
        diet: diet.to_string(),
        tax_category: "Food and beverage non-alcoholic".to_string(),
        ..sample_order(order_id, "payer", 8.0)
    }
}

/// Fills a store with two users, two items and an admin row.
///
/// * `anna`: regular member, vegan
/// * `bo`: volunteer, meat
/// * Coffee at 1.50, Beer at 3.50
/// * dinner 8.00 until 15:00, breakfast until 21:00, Small breakfast 4.00
pub async fn seed_store<S: TableStore>(store: &S) -> Result<()> {
    let mut anna = sample_user("anna", "Anna", "Berg");
    anna.diet = "Vegan".to_string();
    let mut bo = sample_user("bo", "Bo", "Lind");
    bo.volunteer = true;
    for user in [anna, bo] {
        store
            .append_row(Sheet::Users, user.to_row_values(), false)
            .await?;
    }

    for (name, price, tax_category) in [
        ("Coffee", 1.5, "Food and beverage non-alcoholic"),
        ("Beer", 3.5, "Beverage with alcohol"),
    ] {
        let item = Item {
            name: name.to_string(),
            price,
            description: String::new(),
            tax_category: tax_category.to_string(),
        };
        store
            .append_row(Sheet::Items, item.to_row_values(), false)
            .await?;
    }

    let mut admin = AdminConfig {
        dinner_price: 8.0,
        dinner_signup_deadline: "15:00".to_string(),
        breakfast_signup_deadline: "21:00".to_string(),
        ..AdminConfig::default()
    };
    admin.breakfast_prices.insert(BreakfastItem::Small, 4.0);
    store
        .append_row(Sheet::Admin, admin.to_row_values(), false)
        .await
}
