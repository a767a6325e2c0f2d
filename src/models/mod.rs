//! Typed records parsed from raw sheet rows.
//!
//! Parsing is tolerant: malformed optional cells fall back to documented defaults
//! instead of failing, and rows with an empty primary key are skipped as blank
//! trailing rows. Nothing past this boundary touches raw rows again.

/// Administrator configuration and the breakfast menu
pub mod admin;
/// Catalog items and tax categories
pub mod item;
/// Ledger orders
pub mod order;
/// Roster users and diets
pub mod user;

pub use admin::{AdminConfig, BreakfastItem};
pub use item::{Catalog, Item, TaxCategory};
pub use order::Order;
pub use user::{Diet, User};

use crate::store::Row;

/// Cell text for `column`, or the empty string when the column is missing.
#[must_use]
pub fn cell<'a>(row: &'a Row, column: &str) -> &'a str {
    row.get(column).map_or("", String::as_str)
}

/// Parses a numeric cell, substituting `default` for anything that is not a finite number.
#[must_use]
pub fn parse_f64_or(value: &str, default: f64) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// A flag cell is set only when it reads exactly `"yes"`.
#[must_use]
pub fn parse_yes(value: &str) -> bool {
    value == "yes"
}

/// Writes a flag back the way [`parse_yes`] reads it.
#[must_use]
pub const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_f64_or_falls_back() {
        assert_eq!(parse_f64_or("abc", 0.0), 0.0);
        assert_eq!(parse_f64_or("", 1.0), 1.0);
        assert_eq!(parse_f64_or("NaN", 1.0), 1.0);
        assert_eq!(parse_f64_or(" 2.5 ", 0.0), 2.5);
    }

    #[test]
    fn test_parse_yes_is_case_sensitive() {
        assert!(parse_yes("yes"));
        assert!(!parse_yes("Yes"));
        assert!(!parse_yes("no"));
        assert!(!parse_yes(""));
    }

    #[test]
    fn test_missing_cell_reads_empty() {
        let row = Row::new();
        assert_eq!(cell(&row, "nick_name"), "");
    }
}
