//! Order construction - turns the four ordering intents into ledger orders.
//!
//! Construction is pure: identifiers and timestamps come in through an
//! [`OrderStamp`] so callers decide when "now" is. Validation failures return an
//! error before anything is written.

use crate::{
    errors::{Error, Result},
    models::{
        AdminConfig, BreakfastItem, Catalog, Order, TaxCategory, User,
        order::{BREAKFAST_SIGNUP, DINNER_SIGNUP},
    },
};
use chrono::{Local, NaiveDateTime, SubsecRound};
use uuid::Uuid;

/// Identity and creation time assigned to a new order on the server side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderStamp {
    /// Fresh random order id
    pub order_id: String,
    /// Creation time, local wall clock
    pub time: NaiveDateTime,
}

impl OrderStamp {
    /// A new random id stamped with the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    /// A new random id stamped with `time`, cut to the microsecond precision
    /// the store keeps.
    #[must_use]
    pub fn at(time: NaiveDateTime) -> Self {
        Self {
            order_id: Uuid::new_v4().to_string(),
            time: time.trunc_subsecs(6),
        }
    }
}

/// Requester input for an off-catalog purchase.
#[derive(Clone, Debug, Default)]
pub struct CustomOrderRequest {
    /// What was bought
    pub name: String,
    /// Price as typed
    pub price: String,
    /// Tax category label as chosen
    pub tax_category: String,
    /// Optional note
    pub comment: String,
}

/// Requester input for a dinner sign-up.
#[derive(Clone, Debug, Default)]
pub struct DinnerSignup {
    /// Guest's given name
    pub first_name: String,
    /// Guest's family name
    pub last_name: String,
    /// Guest's diet
    pub diet: String,
    /// Guest's allergies
    pub allergies: String,
}

/// Requester input for a breakfast or packed-lunch sign-up.
#[derive(Clone, Debug)]
pub struct BreakfastSignup {
    /// Chosen menu item
    pub menu_item: BreakfastItem,
    /// Guest's given name
    pub first_name: String,
    /// Guest's family name
    pub last_name: String,
    /// Guest's allergies
    pub allergies: String,
}

/// A blank order for `nick_name` with quantity one; callers fill in the rest.
fn base_order(stamp: OrderStamp, nick_name: &str, item: &str) -> Order {
    Order {
        order_id: stamp.order_id,
        user_nick_name: nick_name.to_string(),
        time: Some(stamp.time),
        item: item.to_string(),
        quantity: 1.0,
        price: 0.0,
        total: 0.0,
        receiver: String::new(),
        diet: String::new(),
        allergies: String::new(),
        served: String::new(),
        tax_category: String::new(),
        comment: String::new(),
    }
}

/// Slack allowed when checking that a price is a whole number of cents.
const CENT_TOLERANCE: f64 = 1e-6;

/// Parses a requested quantity: finite and not negative.
pub fn parse_quantity(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|quantity| quantity.is_finite() && *quantity >= 0.0)
        .ok_or_else(|| Error::InvalidQuantity {
            input: input.to_string(),
        })
}

/// Parses a typed price: finite, non-negative, at most two decimal places.
pub fn parse_custom_price(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let invalid = || Error::InvalidPrice {
        input: input.to_string(),
    };

    let price = trimmed.parse::<f64>().map_err(|_| invalid())?;
    if !price.is_finite() || price < 0.0 {
        return Err(invalid());
    }
    // Whole cents, whatever the notation.
    let cents = price * 100.0;
    if (cents - cents.round()).abs() > CENT_TOLERANCE {
        return Err(invalid());
    }
    Ok(price)
}

/// Orders `quantity_input` units of a catalog item at its current price.
pub fn catalog_order(
    stamp: OrderStamp,
    nick_name: &str,
    catalog: &Catalog,
    item_name: &str,
    quantity_input: &str,
) -> Result<Order> {
    let quantity = parse_quantity(quantity_input)?;
    let item = catalog.get(item_name).ok_or_else(|| Error::ItemNotFound {
        name: item_name.to_string(),
    })?;

    let mut order = base_order(stamp, nick_name, &item.name);
    order.quantity = quantity;
    order.price = item.price;
    order.total = quantity * item.price;
    order.tax_category.clone_from(&item.tax_category);
    Ok(order)
}

/// Orders one unit of something not in the catalog.
pub fn custom_order(stamp: OrderStamp, nick_name: &str, request: &CustomOrderRequest) -> Result<Order> {
    let price = parse_custom_price(&request.price)?;
    let tax_category: TaxCategory = request.tax_category.parse()?;

    let mut order = base_order(stamp, nick_name, &request.name);
    order.price = price;
    order.total = price;
    order.tax_category = tax_category.to_string();
    order.comment.clone_from(&request.comment);
    Ok(order)
}

/// Signs a guest up for tonight's dinner, paid by `nick_name`.
#[must_use]
pub fn dinner_signup(
    stamp: OrderStamp,
    nick_name: &str,
    admin: &AdminConfig,
    form: &DinnerSignup,
) -> Order {
    let full_name = format!("{} {}", form.first_name, form.last_name);
    late_dinner_signup(stamp, nick_name, &full_name, admin, &form.diet, &form.allergies)
}

/// Dinner sign-up entered by an administrator for an explicitly chosen payer.
#[must_use]
pub fn late_dinner_signup(
    stamp: OrderStamp,
    payer_nick_name: &str,
    full_name: &str,
    admin: &AdminConfig,
    diet: &str,
    allergies: &str,
) -> Order {
    let mut order = base_order(stamp, payer_nick_name, DINNER_SIGNUP);
    order.price = admin.dinner_price;
    order.total = admin.dinner_price;
    order.receiver = full_name.to_string();
    order.diet = diet.to_string();
    order.allergies = allergies.to_string();
    order.tax_category = TaxCategory::FoodAndBeverageNonAlcoholic.to_string();
    order
}

/// Signs a guest up for breakfast or a packed lunch, paid by `user`.
///
/// Volunteers pay nothing. The menu item is recorded in the order's diet column.
#[must_use]
pub fn breakfast_signup(
    stamp: OrderStamp,
    user: &User,
    admin: &AdminConfig,
    form: &BreakfastSignup,
) -> Order {
    let price = if user.volunteer {
        0.0
    } else {
        admin.breakfast_price(form.menu_item)
    };

    let mut order = base_order(stamp, &user.nick_name, BREAKFAST_SIGNUP);
    order.price = price;
    order.total = price;
    order.receiver = format!("{} {}", form.first_name, form.last_name);
    order.diet = form.menu_item.to_string();
    order.allergies.clone_from(&form.allergies);
    order.tax_category = TaxCategory::FoodAndBeverageNonAlcoholic.to_string();
    order
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{at, item_row, sample_user};

    fn stamp() -> OrderStamp {
        OrderStamp::at(at(2024, 5, 1, 12, 0, 0))
    }

    fn coffee_catalog() -> Catalog {
        Catalog::from_rows(&[item_row("Coffee", "1.50", "Food and beverage non-alcoholic")])
    }

    fn admin() -> AdminConfig {
        let mut admin = AdminConfig::default();
        admin.dinner_price = 8.0;
        admin.breakfast_prices.insert(BreakfastItem::FullEnglish, 6.5);
        admin
    }

    #[test]
    fn test_catalog_order_snapshots_price() {
        let first = catalog_order(stamp(), "anna", &coffee_catalog(), "Coffee", "2").unwrap();
        assert_eq!(first.price, 1.5);
        assert_eq!(first.total, 3.0);
        assert_eq!(first.quantity, 2.0);
        assert_eq!(first.tax_category, "Food and beverage non-alcoholic");
        assert_eq!(first.item, "Coffee");
        assert_eq!(first.user_nick_name, "anna");

        let second = catalog_order(stamp(), "anna", &coffee_catalog(), "Coffee", "2").unwrap();
        assert_ne!(first.order_id, second.order_id);
        assert!(Uuid::parse_str(&first.order_id).is_ok());
    }

    #[test]
    fn test_catalog_order_rejects_bad_quantity() {
        let result = catalog_order(stamp(), "anna", &coffee_catalog(), "Coffee", "two");
        assert!(matches!(result.unwrap_err(), Error::InvalidQuantity { .. }));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let result = catalog_order(stamp(), "anna", &coffee_catalog(), "Coffee", "-10");
        assert!(matches!(result.unwrap_err(), Error::InvalidQuantity { .. }));
        assert_eq!(parse_quantity("0").unwrap(), 0.0);
        assert_eq!(parse_quantity(" 1.5 ").unwrap(), 1.5);
    }

    #[test]
    fn test_catalog_order_rejects_unknown_item() {
        let result = catalog_order(stamp(), "anna", &coffee_catalog(), "Tea", "1");
        assert!(matches!(result.unwrap_err(), Error::ItemNotFound { .. }));
    }

    #[test]
    fn test_custom_order() {
        let request = CustomOrderRequest {
            name: "Yoga mat".to_string(),
            price: "12.50".to_string(),
            tax_category: "Fitness".to_string(),
            comment: "blue one".to_string(),
        };
        let order = custom_order(stamp(), "anna", &request).unwrap();
        assert_eq!(order.quantity, 1.0);
        assert_eq!(order.price, 12.5);
        assert_eq!(order.total, 12.5);
        assert_eq!(order.tax_category, "Fitness");
        assert_eq!(order.comment, "blue one");
    }

    #[test]
    fn test_custom_order_validation() {
        let mut request = CustomOrderRequest {
            name: "Thing".to_string(),
            price: "abc".to_string(),
            tax_category: "Fitness".to_string(),
            comment: String::new(),
        };
        assert!(matches!(
            custom_order(stamp(), "anna", &request).unwrap_err(),
            Error::InvalidPrice { .. }
        ));

        request.price = "1.999".to_string();
        assert!(custom_order(stamp(), "anna", &request).is_err());

        request.price = "-1".to_string();
        assert!(custom_order(stamp(), "anna", &request).is_err());

        request.price = "1e-3".to_string();
        assert!(matches!(
            custom_order(stamp(), "anna", &request).unwrap_err(),
            Error::InvalidPrice { .. }
        ));

        request.price = "2".to_string();
        request.tax_category = "Food".to_string();
        assert!(matches!(
            custom_order(stamp(), "anna", &request).unwrap_err(),
            Error::UnknownTaxCategory { .. }
        ));
    }

    #[test]
    fn test_custom_price_judged_by_value() {
        assert_eq!(parse_custom_price("0.5e1").unwrap(), 5.0);
        assert_eq!(parse_custom_price("2.10").unwrap(), 2.1);
        assert_eq!(parse_custom_price("0.07").unwrap(), 0.07);
        assert_eq!(parse_custom_price("19.99").unwrap(), 19.99);
        assert!(parse_custom_price("1e-3").is_err());
        assert!(parse_custom_price("1.005").is_err());
        assert!(parse_custom_price("inf").is_err());
    }

    #[test]
    fn test_dinner_signup() {
        let form = DinnerSignup {
            first_name: "Guest".to_string(),
            last_name: "Person".to_string(),
            diet: "Vegan".to_string(),
            allergies: "nuts".to_string(),
        };
        let order = dinner_signup(stamp(), "anna", &admin(), &form);
        assert_eq!(order.item, DINNER_SIGNUP);
        assert_eq!(order.receiver, "Guest Person");
        assert_eq!(order.price, 8.0);
        assert_eq!(order.total, 8.0);
        assert_eq!(order.quantity, 1.0);
        assert_eq!(order.diet, "Vegan");
        assert_eq!(order.allergies, "nuts");
        assert_eq!(order.tax_category, "Food and beverage non-alcoholic");
    }

    #[test]
    fn test_late_dinner_signup_uses_chosen_payer() {
        let order = late_dinner_signup(stamp(), "bo", "Late Comer", &admin(), "Meat", "");
        assert_eq!(order.user_nick_name, "bo");
        assert_eq!(order.receiver, "Late Comer");
        assert_eq!(order.total, 8.0);
    }

    #[test]
    fn test_breakfast_price_and_volunteer_override() {
        let form = BreakfastSignup {
            menu_item: BreakfastItem::FullEnglish,
            first_name: "Anna".to_string(),
            last_name: "Berg".to_string(),
            allergies: String::new(),
        };
        let mut user = sample_user("anna", "Anna", "Berg");

        let paid = breakfast_signup(stamp(), &user, &admin(), &form);
        assert_eq!(paid.price, 6.5);
        assert_eq!(paid.total, 6.5);
        assert_eq!(paid.diet, "Full English");
        assert_eq!(paid.item, BREAKFAST_SIGNUP);

        user.volunteer = true;
        let free = breakfast_signup(stamp(), &user, &admin(), &form);
        assert_eq!(free.price, 0.0);
        assert_eq!(free.total, 0.0);
    }
}
