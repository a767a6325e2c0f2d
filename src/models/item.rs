//! Catalog items and the fixed tax categories.

use super::{cell, parse_f64_or};
use crate::{errors::Error, store::Row};
use std::{fmt, str::FromStr};

/// Columns of the `items` sheet, in order.
pub const ITEM_COLUMNS: [&str; 4] = ["name", "price", "description", "tax_category"];

/// Classification label carried by every order, used only for revenue reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaxCategory {
    /// Food and soft drinks, including all meal sign-ups
    FoodAndBeverageNonAlcoholic,
    /// Drinks containing alcohol
    BeverageWithAlcohol,
    /// Classes and gym use
    Fitness,
    /// Anything else
    Miscellaneous,
}

impl TaxCategory {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [
        Self::FoodAndBeverageNonAlcoholic,
        Self::BeverageWithAlcohol,
        Self::Fitness,
        Self::Miscellaneous,
    ];

    /// Label as stored in sheets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FoodAndBeverageNonAlcoholic => "Food and beverage non-alcoholic",
            Self::BeverageWithAlcohol => "Beverage with alcohol",
            Self::Fitness => "Fitness",
            Self::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for TaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::UnknownTaxCategory {
                name: s.to_string(),
            })
    }
}

/// A catalog entry orderable at a fixed price.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Unique item name
    pub name: String,
    /// Unit price, never negative
    pub price: f64,
    /// Free-text description
    pub description: String,
    /// Tax category label, copied onto orders as-is
    pub tax_category: String,
}

impl Item {
    /// Parses an `items` row. Returns `None` for rows without a name.
    ///
    /// A malformed or negative price reads as `0.0`.
    #[must_use]
    pub fn from_row(row: &Row) -> Option<Self> {
        let name = cell(row, "name");
        if name.is_empty() {
            return None;
        }

        let price = parse_f64_or(cell(row, "price"), 0.0);
        Some(Self {
            name: name.to_string(),
            price: if price < 0.0 { 0.0 } else { price },
            description: cell(row, "description").to_string(),
            tax_category: cell(row, "tax_category").to_string(),
        })
    }

    /// Cell values in [`ITEM_COLUMNS`] order.
    #[must_use]
    pub fn to_row_values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.price.to_string(),
            self.description.clone(),
            self.tax_category.clone(),
        ]
    }
}

/// The item catalog in sheet order, looked up by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Parses the `items` sheet, skipping blank rows.
    ///
    /// When a name appears twice the later row wins but keeps the earlier position.
    #[must_use]
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut catalog = Self::default();
        for item in rows.iter().filter_map(Item::from_row) {
            catalog.insert(item);
        }
        catalog
    }

    fn insert(&mut self, item: Item) {
        match self.items.iter_mut().find(|existing| existing.name == item.name) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Looks up an item by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Items in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::item_row;

    #[test]
    fn test_malformed_price_reads_zero() {
        let item = Item::from_row(&item_row("Coffee", "abc", "Miscellaneous")).unwrap();
        assert_eq!(item.price, 0.0);

        let item = Item::from_row(&item_row("Coffee", "-2", "Miscellaneous")).unwrap();
        assert_eq!(item.price, 0.0);
    }

    #[test]
    fn test_catalog_skips_blank_rows_and_keeps_order() {
        let rows = vec![
            item_row("Tea", "1.0", "Miscellaneous"),
            item_row("", "3.0", "Miscellaneous"),
            item_row("Beer", "3.5", "Beverage with alcohol"),
        ];
        let catalog = Catalog::from_rows(&rows);
        let names: Vec<&str> = catalog.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Beer"]);
    }

    #[test]
    fn test_duplicate_name_later_row_wins() {
        let rows = vec![
            item_row("Tea", "1.0", "Miscellaneous"),
            item_row("Beer", "3.5", "Beverage with alcohol"),
            item_row("Tea", "1.2", "Miscellaneous"),
        ];
        let catalog = Catalog::from_rows(&rows);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Tea").unwrap().price, 1.2);
        assert_eq!(catalog.iter().next().unwrap().name, "Tea");
    }

    #[test]
    fn test_tax_category_labels_parse() {
        for category in TaxCategory::ALL {
            assert_eq!(category.as_str().parse::<TaxCategory>().unwrap(), category);
        }
        assert!("Food".parse::<TaxCategory>().is_err());
    }
}
