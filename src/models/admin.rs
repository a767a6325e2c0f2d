//! Administrator configuration and the breakfast menu.
//!
//! The `admin` sheet holds a single row. Prices fall back to `0.0` when a cell is
//! missing or malformed; deadline strings are kept raw and interpreted by
//! [`crate::core::deadline`] on every check.

use super::{cell, parse_f64_or};
use crate::{core::deadline, errors::Error, store::Row};
use chrono::Timelike;
use std::{collections::BTreeMap, fmt, str::FromStr};
use tracing::warn;

/// Columns of the `admin` sheet, in order.
pub const ADMIN_COLUMNS: [&str; 11] = [
    "dinner_price",
    "dinner_signup_deadline",
    "breakfast_signup_deadline",
    "Vegan_price",
    "Small_price",
    "Continental_price",
    "Full English_price",
    "Vegetarian_price",
    "Packed Lunch (Vegan)_price",
    "Packed Lunch (Vegetarian)_price",
    "Packed Lunch (Meat)_price",
];

/// Breakfast and packed-lunch menu choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BreakfastItem {
    /// Vegan breakfast
    Vegan,
    /// Small breakfast
    Small,
    /// Continental breakfast
    Continental,
    /// Full English breakfast
    FullEnglish,
    /// Vegetarian breakfast
    Vegetarian,
    /// Vegan packed lunch
    PackedLunchVegan,
    /// Vegetarian packed lunch
    PackedLunchVegetarian,
    /// Packed lunch with meat
    PackedLunchMeat,
}

impl BreakfastItem {
    /// The whole menu in display order.
    pub const ALL: [Self; 8] = [
        Self::Vegan,
        Self::Small,
        Self::Continental,
        Self::FullEnglish,
        Self::Vegetarian,
        Self::PackedLunchVegan,
        Self::PackedLunchVegetarian,
        Self::PackedLunchMeat,
    ];

    /// Menu label as stored on orders.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vegan => "Vegan",
            Self::Small => "Small",
            Self::Continental => "Continental",
            Self::FullEnglish => "Full English",
            Self::Vegetarian => "Vegetarian",
            Self::PackedLunchVegan => "Packed Lunch (Vegan)",
            Self::PackedLunchVegetarian => "Packed Lunch (Vegetarian)",
            Self::PackedLunchMeat => "Packed Lunch (Meat)",
        }
    }

    /// Admin column holding this item's price, e.g. `"Full English_price"`.
    #[must_use]
    pub fn price_key(self) -> String {
        format!("{}_price", self.as_str())
    }
}

impl fmt::Display for BreakfastItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreakfastItem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|item| item.as_str() == s)
            .ok_or_else(|| Error::UnknownMenuItem {
                name: s.to_string(),
            })
    }
}

/// The single administrator configuration record.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminConfig {
    /// Price of one dinner sign-up
    pub dinner_price: f64,
    /// Last dinner sign-up time, `"HH:MM"`
    pub dinner_signup_deadline: String,
    /// Last breakfast sign-up time, `"HH:MM"`
    pub breakfast_signup_deadline: String,
    /// Price per breakfast menu item
    pub breakfast_prices: BTreeMap<BreakfastItem, f64>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::from_row(&Row::new())
    }
}

impl AdminConfig {
    /// Parses the admin row. Missing or malformed prices read as `0.0`.
    #[must_use]
    pub fn from_row(row: &Row) -> Self {
        let breakfast_prices = BreakfastItem::ALL
            .into_iter()
            .map(|item| (item, parse_f64_or(cell(row, &item.price_key()), 0.0)))
            .collect();

        Self {
            dinner_price: parse_f64_or(cell(row, "dinner_price"), 0.0),
            dinner_signup_deadline: cell(row, "dinner_signup_deadline").to_string(),
            breakfast_signup_deadline: cell(row, "breakfast_signup_deadline").to_string(),
            breakfast_prices,
        }
    }

    /// Uses the first row of the `admin` sheet, or defaults when the sheet is empty.
    #[must_use]
    pub fn from_rows(rows: &[Row]) -> Self {
        rows.first().map(Self::from_row).unwrap_or_else(|| {
            warn!("Admin sheet is empty, using default configuration");
            Self::default()
        })
    }

    /// Price of a breakfast menu item.
    #[must_use]
    pub fn breakfast_price(&self, item: BreakfastItem) -> f64 {
        self.breakfast_prices.get(&item).copied().unwrap_or(0.0)
    }

    /// Whether dinner sign-up is still open at `now`.
    #[must_use]
    pub fn dinner_signup_open<T: Timelike>(&self, now: &T) -> bool {
        deadline::is_signup_open(&self.dinner_signup_deadline, now)
    }

    /// Whether breakfast sign-up is still open at `now`.
    #[must_use]
    pub fn breakfast_signup_open<T: Timelike>(&self, now: &T) -> bool {
        deadline::is_signup_open(&self.breakfast_signup_deadline, now)
    }

    /// Cell values in [`ADMIN_COLUMNS`] order.
    #[must_use]
    pub fn to_row_values(&self) -> Vec<String> {
        let mut values = vec![
            self.dinner_price.to_string(),
            self.dinner_signup_deadline.clone(),
            self.breakfast_signup_deadline.clone(),
        ];
        values.extend(
            BreakfastItem::ALL
                .into_iter()
                .map(|item| self.breakfast_price(item).to_string()),
        );
        values
    }
}
