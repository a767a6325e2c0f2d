//! Seed configuration loading from config.toml
//!
//! The admin row and the item catalog can be described in a TOML file. They are
//! written to the store on startup when the corresponding sheets are still empty;
//! after that the store is the source of truth and the file is ignored.

use crate::{
    errors::{Error, Result},
    models::{AdminConfig, BreakfastItem, Item, TaxCategory},
};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

/// Config file used when `OLIVE_BRANCH_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct SeedConfig {
    /// Initial admin row
    #[serde(default)]
    pub admin: Option<AdminSeed>,
    /// Initial catalog
    #[serde(default)]
    pub items: Vec<ItemSeed>,
}

/// Initial prices and deadlines
#[derive(Debug, Deserialize, Clone)]
pub struct AdminSeed {
    /// Price of one dinner sign-up
    pub dinner_price: f64,
    /// Last dinner sign-up time, `"HH:MM"`
    pub dinner_signup_deadline: String,
    /// Last breakfast sign-up time, `"HH:MM"`
    pub breakfast_signup_deadline: String,
    /// Price per breakfast menu label, e.g. `"Full English" = 6.5`
    #[serde(default)]
    pub breakfast_prices: BTreeMap<String, f64>,
}

impl AdminSeed {
    /// Converts to an [`AdminConfig`], rejecting unknown menu labels.
    pub fn to_admin_config(&self) -> Result<AdminConfig> {
        let mut admin = AdminConfig {
            dinner_price: self.dinner_price,
            dinner_signup_deadline: self.dinner_signup_deadline.clone(),
            breakfast_signup_deadline: self.breakfast_signup_deadline.clone(),
            ..AdminConfig::default()
        };
        for (label, price) in &self.breakfast_prices {
            let item: BreakfastItem = label.parse().map_err(|e| Error::Config {
                message: format!("Invalid breakfast price entry: {e}"),
            })?;
            admin.breakfast_prices.insert(item, *price);
        }
        Ok(admin)
    }
}

/// One catalog item
#[derive(Debug, Deserialize, Clone)]
pub struct ItemSeed {
    /// Unique item name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// One of the fixed tax category labels
    pub tax_category: String,
}

impl ItemSeed {
    /// Converts to an [`Item`], validating price and tax category.
    pub fn to_item(&self) -> Result<Item> {
        if self.name.trim().is_empty() {
            return Err(Error::Config {
                message: "Item name cannot be empty".to_string(),
            });
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::Config {
                message: format!("Item '{}' has invalid price {}", self.name, self.price),
            });
        }
        let tax_category: TaxCategory = self.tax_category.parse().map_err(|e| Error::Config {
            message: format!("Item '{}': {e}", self.name),
        })?;

        Ok(Item {
            name: self.name.trim().to_string(),
            price: self.price,
            description: self.description.clone(),
            tax_category: tax_category.to_string(),
        })
    }
}

/// Loads seed configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    parse_config(&contents)
}

/// Parses seed configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<SeedConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Path named by `OLIVE_BRANCH_CONFIG`, or [`DEFAULT_CONFIG_PATH`].
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var("OLIVE_BRANCH_CONFIG").map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Loads the configured file, or an empty seed when it does not exist.
pub fn load_default_config() -> Result<SeedConfig> {
    let path = config_path();
    if !path.exists() {
        warn!(path = %path.display(), "No config file found, nothing will be seeded");
        return Ok(SeedConfig::default());
    }
    debug!(path = %path.display(), "Loading seed configuration");
    load_config(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_seed_config() {
        let toml_str = r#"
            [admin]
            dinner_price = 8.0
            dinner_signup_deadline = "15:00"
            breakfast_signup_deadline = "21:00"

            [admin.breakfast_prices]
            "Full English" = 6.5
            "Packed Lunch (Meat)" = 5.0

            [[items]]
            name = "Coffee"
            price = 1.5
            tax_category = "Food and beverage non-alcoholic"

            [[items]]
            name = "Beer"
            price = 3.5
            description = "Local lager"
            tax_category = "Beverage with alcohol"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.items.len(), 2);
        assert_eq!(config.items[1].description, "Local lager");

        let admin = config.admin.unwrap().to_admin_config().unwrap();
        assert_eq!(admin.dinner_price, 8.0);
        assert_eq!(admin.breakfast_price(BreakfastItem::FullEnglish), 6.5);
        assert_eq!(admin.breakfast_price(BreakfastItem::Small), 0.0);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = parse_config("").unwrap();
        assert!(config.admin.is_none());
        assert!(config.items.is_empty());
    }

    #[test]
    fn test_unknown_tax_category_rejected() {
        let seed = ItemSeed {
            name: "Thing".to_string(),
            price: 1.0,
            description: String::new(),
            tax_category: "Food".to_string(),
        };
        assert!(matches!(seed.to_item().unwrap_err(), Error::Config { .. }));
    }

    #[test]
    fn test_unknown_menu_label_rejected() {
        let seed = AdminSeed {
            dinner_price: 8.0,
            dinner_signup_deadline: "15:00".to_string(),
            breakfast_signup_deadline: "21:00".to_string(),
            breakfast_prices: BTreeMap::from([("Pancakes".to_string(), 3.0)]),
        };
        assert!(seed.to_admin_config().is_err());
    }
}
