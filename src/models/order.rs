//! Ledger orders.
//!
//! An order is written once and never changed. `price` is the unit price at the
//! moment of ordering and `total` is stored, not recomputed, so reports stay stable
//! when catalog prices move.

use super::{cell, parse_f64_or};
use crate::store::Row;
use chrono::{NaiveDate, NaiveDateTime};

/// Columns of the `orders` sheet, in order.
pub const ORDER_COLUMNS: [&str; 13] = [
    "order_id",
    "user_nick_name",
    "time",
    "item",
    "quantity",
    "price",
    "total",
    "receiver",
    "diet",
    "allergies",
    "served",
    "tax_category",
    "comment",
];

/// Item label of a dinner sign-up.
pub const DINNER_SIGNUP: &str = "Dinner sign-up";
/// Item label of a breakfast or packed-lunch sign-up.
pub const BREAKFAST_SIGNUP: &str = "Breakfast sign-up";
/// Item label of the synthetic roster entry for a volunteer.
pub const VOLUNTEER_DINNER: &str = "Dinner sign-up (volunteer)";

/// Timestamp layout written to the `time` column.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Layouts accepted when reading the `time` column back.
const TIME_INPUT_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// One immutable ledger entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    /// UUID assigned at creation
    pub order_id: String,
    /// Nick name of the paying user; not checked against the roster
    pub user_nick_name: String,
    /// Creation time, `None` when the stored cell is unreadable
    pub time: Option<NaiveDateTime>,
    /// Catalog item name, sign-up label, or free-text custom name
    pub item: String,
    /// Number of units
    pub quantity: f64,
    /// Unit price at order time
    pub price: f64,
    /// `quantity * price`, computed once at creation
    pub total: f64,
    /// Person the order is for
    pub receiver: String,
    /// Diet (dinner) or menu item (breakfast)
    pub diet: String,
    /// Free-text allergies
    pub allergies: String,
    /// Free-text serving status
    pub served: String,
    /// Tax category label
    pub tax_category: String,
    /// Free-text comment
    pub comment: String,
}

impl Order {
    /// Parses an `orders` row. Returns `None` for rows without an order id.
    ///
    /// Bad numeric cells fall back to `1.0` for quantity and `0.0` for price and total.
    /// Older sheets name the nick name column `user`; it is read when
    /// `user_nick_name` is absent.
    #[must_use]
    pub fn from_row(row: &Row) -> Option<Self> {
        let order_id = cell(row, "order_id");
        if order_id.is_empty() {
            return None;
        }

        let user_nick_name = row
            .get("user_nick_name")
            .or_else(|| row.get("user"))
            .cloned()
            .unwrap_or_default();

        Some(Self {
            order_id: order_id.to_string(),
            user_nick_name,
            time: parse_timestamp(cell(row, "time")),
            item: cell(row, "item").to_string(),
            quantity: parse_f64_or(cell(row, "quantity"), 1.0),
            price: parse_f64_or(cell(row, "price"), 0.0),
            total: parse_f64_or(cell(row, "total"), 0.0),
            receiver: cell(row, "receiver").to_string(),
            diet: cell(row, "diet").to_string(),
            allergies: cell(row, "allergies").to_string(),
            served: cell(row, "served").to_string(),
            tax_category: cell(row, "tax_category").to_string(),
            comment: cell(row, "comment").to_string(),
        })
    }

    /// Cell values in [`ORDER_COLUMNS`] order.
    #[must_use]
    pub fn to_row_values(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.user_nick_name.clone(),
            self.time
                .map(|time| time.format(TIME_FORMAT).to_string())
                .unwrap_or_default(),
            self.item.clone(),
            self.quantity.to_string(),
            self.price.to_string(),
            self.total.to_string(),
            self.receiver.clone(),
            self.diet.clone(),
            self.allergies.clone(),
            self.served.clone(),
            self.tax_category.clone(),
            self.comment.clone(),
        ]
    }

    /// Calendar date the order was placed on.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.time.map(|time| time.date())
    }

    /// Time of day as `HH:MM:SS`, empty when unknown.
    #[must_use]
    pub fn clock_time(&self) -> String {
        self.time
            .map(|time| time.format("%H:%M:%S").to_string())
            .unwrap_or_default()
    }

    /// Date and time as shown in order histories.
    #[must_use]
    pub fn history_time(&self) -> String {
        self.time
            .map(|time| time.format("%Y-%m-%d, %H:%M:%S").to_string())
            .unwrap_or_default()
    }
}

/// Reads a stored timestamp in any of the accepted layouts.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIME_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{at, order_row};

    #[test]
    fn test_numeric_fallbacks() {
        let mut row = order_row("o1", "anna", "2024-05-01 12:00:00", "Coffee");
        row.insert("quantity".to_string(), String::new());
        row.insert("price".to_string(), "abc".to_string());
        row.insert("total".to_string(), "?".to_string());

        let order = Order::from_row(&row).unwrap();
        assert_eq!(order.quantity, 1.0);
        assert_eq!(order.price, 0.0);
        assert_eq!(order.total, 0.0);
    }

    #[test]
    fn test_empty_order_id_is_skipped() {
        let row = order_row("", "anna", "2024-05-01 12:00:00", "Coffee");
        assert!(Order::from_row(&row).is_none());
    }

    #[test]
    fn test_legacy_user_column() {
        let mut row = order_row("o1", "anna", "2024-05-01 12:00:00", "Coffee");
        row.remove("user_nick_name");
        row.insert("user".to_string(), "bo".to_string());

        assert_eq!(Order::from_row(&row).unwrap().user_nick_name, "bo");
    }

    #[test]
    fn test_timestamp_layouts() {
        let expected = at(2024, 5, 1, 12, 30, 15);
        assert_eq!(parse_timestamp("2024-05-01 12:30:15"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T12:30:15"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-05-01 12:30:15.250000").map(|t| t.date()),
            Some(expected.date())
        );
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_unreadable_time_keeps_order() {
        let row = order_row("o1", "anna", "not a time", "Coffee");
        let order = Order::from_row(&row).unwrap();
        assert!(order.time.is_none());
        assert!(order.date().is_none());
        assert_eq!(order.clock_time(), "");
    }

    #[test]
    fn test_row_values_round_trip() {
        let order = Order::from_row(&order_row("o1", "anna", "2024-05-01 12:30:15", "Coffee")).unwrap();
        let rebuilt =
            crate::store::row_from_values(crate::store::Sheet::Orders, &order.to_row_values()).unwrap();
        assert_eq!(Order::from_row(&rebuilt).unwrap(), order);
    }

    #[test]
    fn test_display_times() {
        let order = Order::from_row(&order_row("o1", "anna", "2024-05-01 07:05:09", "Coffee")).unwrap();
        assert_eq!(order.clock_time(), "07:05:09");
        assert_eq!(order.history_time(), "2024-05-01, 07:05:09");
    }
}
