//! Derived views over the ledger and roster.
//!
//! Every function here is a pure computation over borrowed data and is meant to be
//! re-run on each read: nothing is cached, so a reload is reflected immediately.
//!
//! Debt sums order totals while tax-category revenue sums unit prices. The two
//! reports intentionally differ for orders with a quantity other than one.

use crate::models::{
    Diet, Order, User,
    order::{BREAKFAST_SIGNUP, DINNER_SIGNUP, VOLUNTEER_DINNER},
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Orders paid by `nick_name`, most recent first.
#[must_use]
pub fn orders_for_user<'a>(orders: &'a [Order], nick_name: &str) -> Vec<&'a Order> {
    let mut filtered: Vec<&Order> = orders
        .iter()
        .filter(|order| order.user_nick_name == nick_name)
        .collect();
    filtered.sort_by(|a, b| b.time.cmp(&a.time));
    filtered
}

/// What `nick_name` owes: the sum of their order totals.
#[must_use]
pub fn debt(orders: &[Order], nick_name: &str) -> f64 {
    orders_for_user(orders, nick_name)
        .into_iter()
        .map(|order| order.total)
        .sum()
}

/// Unit prices summed per tax category. Categories without orders are absent.
#[must_use]
pub fn revenue_by_tax_category(orders: &[Order]) -> BTreeMap<String, f64> {
    let mut result = BTreeMap::new();
    for order in orders {
        *result.entry(order.tax_category.clone()).or_insert(0.0) += order.price;
    }
    result
}

/// A breakfast sign-up as listed for the kitchen.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakfastEntry {
    /// Sign-up time of day, `HH:MM:SS`
    pub display_time: String,
    /// The sign-up order
    pub order: Order,
}

/// Today's breakfast sign-ups, latest first.
#[must_use]
pub fn breakfast_roster(orders: &[Order], today: NaiveDate) -> Vec<BreakfastEntry> {
    let mut signups: Vec<BreakfastEntry> = orders
        .iter()
        .filter(|order| order.item == BREAKFAST_SIGNUP && order.date() == Some(today))
        .map(|order| BreakfastEntry {
            display_time: order.clock_time(),
            order: order.clone(),
        })
        .collect();
    signups.sort_by(|a, b| b.display_time.cmp(&a.display_time));
    signups
}

/// One diner on today's dinner list.
#[derive(Clone, Debug, PartialEq)]
pub struct DinnerEntry {
    /// The sign-up order, or a synthetic zero-total entry for a volunteer
    pub order: Order,
    /// True when the entry comes from the roster's volunteer flag
    pub volunteer: bool,
}

impl DinnerEntry {
    fn volunteer(user: &User) -> Self {
        Self {
            order: Order {
                order_id: String::new(),
                user_nick_name: user.nick_name.clone(),
                time: None,
                item: VOLUNTEER_DINNER.to_string(),
                quantity: 1.0,
                price: 0.0,
                total: 0.0,
                receiver: user.full_name(),
                diet: user.diet.clone(),
                allergies: user.allergies.clone(),
                served: String::new(),
                tax_category: String::new(),
                comment: "yes".to_string(),
            },
            volunteer: true,
        }
    }
}

/// Today's dinner list: sign-ups first, then volunteers, each by diet and name.
///
/// Volunteers appear once per roster user with the volunteer flag, whether or not
/// they signed up. Their entries are never written back to the store.
#[must_use]
pub fn dinner_roster(orders: &[Order], roster: &[User], today: NaiveDate) -> Vec<DinnerEntry> {
    let mut signups: Vec<DinnerEntry> = orders
        .iter()
        .filter(|order| order.item == DINNER_SIGNUP && order.date() == Some(today))
        .map(|order| DinnerEntry {
            order: order.clone(),
            volunteer: false,
        })
        .collect();
    signups.extend(roster.iter().filter(|user| user.volunteer).map(DinnerEntry::volunteer));

    signups.sort_by(|a, b| {
        a.volunteer
            .cmp(&b.volunteer)
            .then_with(|| a.order.diet.cmp(&b.order.diet))
            .then_with(|| a.order.receiver.cmp(&b.order.receiver))
    });
    signups
}

/// Number of dinner entries with the given diet.
#[must_use]
pub fn dinner_count_by_diet(entries: &[DinnerEntry], diet: Diet) -> usize {
    entries
        .iter()
        .filter(|entry| entry.order.diet == diet.as_str())
        .count()
}

/// Head counts for the kitchen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DietCounts {
    /// Everyone eating dinner, any diet
    pub total: usize,
    /// Vegan diners
    pub vegan: usize,
    /// Vegetarian diners
    pub vegetarian: usize,
    /// Meat eaters
    pub meat: usize,
}

impl DietCounts {
    /// Counts a dinner roster.
    #[must_use]
    pub fn from_roster(entries: &[DinnerEntry]) -> Self {
        Self {
            total: entries.len(),
            vegan: dinner_count_by_diet(entries, Diet::Vegan),
            vegetarian: dinner_count_by_diet(entries, Diet::Vegetarian),
            meat: dinner_count_by_diet(entries, Diet::Meat),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{at, sample_order, sample_user, signup_order};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_orders_for_user_newest_first() {
        let mut older = sample_order("o1", "anna", 1.0);
        older.time = Some(at(2024, 5, 1, 8, 0, 0));
        let mut newer = sample_order("o2", "anna", 1.0);
        newer.time = Some(at(2024, 5, 1, 9, 0, 0));
        let other = sample_order("o3", "bo", 1.0);
        let orders = vec![older, other, newer];

        let ids: Vec<&str> = orders_for_user(&orders, "anna")
            .into_iter()
            .map(|o| o.order_id.as_str())
            .collect();
        assert_eq!(ids, vec!["o2", "o1"]);
    }

    #[test]
    fn test_debt_ignores_other_users() {
        let mut orders = vec![
            sample_order("o1", "anna", 2.5),
            sample_order("o2", "anna", 4.0),
        ];
        assert_eq!(debt(&orders, "anna"), 6.5);

        orders.push(sample_order("o3", "bo", 100.0));
        assert_eq!(debt(&orders, "anna"), 6.5);
        assert_eq!(debt(&orders, "nobody"), 0.0);
    }

    #[test]
    fn test_debt_uses_line_totals() {
        let mut order = sample_order("o1", "anna", 2.0);
        order.quantity = 3.0;
        order.total = 6.0;
        assert_eq!(debt(&[order], "anna"), 6.0);
    }

    #[test]
    fn test_revenue_sums_unit_price() {
        let mut order = sample_order("o1", "anna", 2.0);
        order.quantity = 3.0;
        order.total = 6.0;
        order.tax_category = "Fitness".to_string();

        let revenue = revenue_by_tax_category(&[order]);
        assert_eq!(revenue.len(), 1);
        assert_eq!(revenue["Fitness"], 2.0);
    }

    #[test]
    fn test_revenue_omits_empty_categories() {
        let revenue = revenue_by_tax_category(&[sample_order("o1", "anna", 1.0)]);
        assert!(!revenue.contains_key("Fitness"));
        assert!(revenue_by_tax_category(&[]).is_empty());
    }

    #[test]
    fn test_breakfast_roster_filters_today_and_sorts() {
        let early = signup_order("b1", BREAKFAST_SIGNUP, at(2024, 5, 1, 7, 15, 0), "Anna", "Vegan");
        let late = signup_order("b2", BREAKFAST_SIGNUP, at(2024, 5, 1, 20, 45, 30), "Bo", "Small");
        let yesterday = signup_order("b3", BREAKFAST_SIGNUP, at(2024, 4, 30, 9, 0, 0), "Cy", "Small");
        let dinner = signup_order("d1", DINNER_SIGNUP, at(2024, 5, 1, 9, 0, 0), "Di", "Meat");

        let roster = breakfast_roster(&[early, late, yesterday, dinner], today());
        let times: Vec<&str> = roster.iter().map(|e| e.display_time.as_str()).collect();
        assert_eq!(times, vec!["20:45:30", "07:15:00"]);
    }

    #[test]
    fn test_volunteer_only_dinner_roster() {
        let mut volunteer = sample_user("vic", "Vic", "Toria");
        volunteer.volunteer = true;
        volunteer.diet = "Vegan".to_string();
        let regular = sample_user("reg", "Reg", "Ular");

        let roster = dinner_roster(&[], &[volunteer, regular], today());
        assert_eq!(roster.len(), 1);
        let entry = &roster[0];
        assert!(entry.volunteer);
        assert_eq!(entry.order.total, 0.0);
        assert_eq!(entry.order.receiver, "Vic Toria");
        assert_eq!(entry.order.comment, "yes");
        assert_eq!(entry.order.item, VOLUNTEER_DINNER);
    }

    #[test]
    fn test_dinner_roster_ordering() {
        let time = at(2024, 5, 1, 12, 0, 0);
        let orders = vec![
            signup_order("d1", DINNER_SIGNUP, time, "Zoe", "Meat"),
            signup_order("d2", DINNER_SIGNUP, time, "Adam", "Vegan"),
            signup_order("d3", DINNER_SIGNUP, time, "Bea", "Meat"),
            signup_order("d4", DINNER_SIGNUP, at(2024, 4, 30, 12, 0, 0), "Old", "Meat"),
        ];
        let mut volunteer = sample_user("vic", "Aaron", "Vol");
        volunteer.volunteer = true;
        volunteer.diet = "Meat".to_string();

        let roster = dinner_roster(&orders, &[volunteer], today());
        let names: Vec<&str> = roster.iter().map(|e| e.order.receiver.as_str()).collect();
        assert_eq!(names, vec!["Bea", "Zoe", "Adam", "Aaron Vol"]);
    }

    #[test]
    fn test_diet_counts() {
        let time = at(2024, 5, 1, 12, 0, 0);
        let orders = vec![
            signup_order("d1", DINNER_SIGNUP, time, "A", "Vegan"),
            signup_order("d2", DINNER_SIGNUP, time, "B", "Vegan"),
            signup_order("d3", DINNER_SIGNUP, time, "C", "Meat"),
            signup_order("d4", DINNER_SIGNUP, time, "D", "Pescatarian"),
        ];
        let roster = dinner_roster(&orders, &[], today());

        assert_eq!(dinner_count_by_diet(&roster, Diet::Vegan), 2);
        assert_eq!(dinner_count_by_diet(&roster, Diet::Vegetarian), 0);
        assert_eq!(
            DietCounts::from_roster(&roster),
            DietCounts {
                total: 4,
                vegan: 2,
                vegetarian: 0,
                meat: 1,
            }
        );
    }

    #[test]
    fn test_recomputation_is_stable() {
        let time = at(2024, 5, 1, 12, 0, 0);
        let orders = vec![signup_order("d1", DINNER_SIGNUP, time, "A", "Vegan")];
        assert_eq!(
            dinner_roster(&orders, &[], today()),
            dinner_roster(&orders, &[], today())
        );
    }
}
