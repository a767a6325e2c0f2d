//! Snapshot - everything one request needs, loaded fresh from the store.
//!
//! A snapshot is the explicit context handed to every read and write: roster,
//! catalog, admin configuration and ledger. It is never shared between requests;
//! each request loads its own, so concurrent reloads simply converge on whatever
//! the store holds.

use super::{
    aggregate::{self, BreakfastEntry, DietCounts, DinnerEntry},
    ledger::Ledger,
    ordering::{self, BreakfastSignup, CustomOrderRequest, DinnerSignup, OrderStamp},
};
use crate::{
    errors::{Error, Result},
    models::{AdminConfig, Catalog, Order, User, user::parse_roster},
    store::{Sheet, TableStore},
};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Roster, catalog, admin configuration and ledger as of the last load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// Registered users sorted by nick name
    pub roster: Vec<User>,
    /// Orderable items
    pub catalog: Catalog,
    /// Prices and deadlines
    pub admin: AdminConfig,
    /// All orders, newest first
    pub ledger: Ledger,
}

impl Snapshot {
    /// Reads all four sheets.
    pub async fn load<S: TableStore>(store: &S) -> Result<Self> {
        let roster = parse_roster(&store.get_all_rows(Sheet::Users).await?);
        let catalog = Catalog::from_rows(&store.get_all_rows(Sheet::Items).await?);
        let admin = AdminConfig::from_rows(&store.get_all_rows(Sheet::Admin).await?);
        let ledger = Ledger::load(store).await?;

        debug!(
            users = roster.len(),
            items = catalog.len(),
            orders = ledger.len(),
            "Loaded snapshot"
        );
        Ok(Self {
            roster,
            catalog,
            admin,
            ledger,
        })
    }

    /// Replaces everything with a fresh read. On error nothing changes.
    pub async fn reload<S: TableStore>(&mut self, store: &S) -> Result<()> {
        *self = Self::load(store).await?;
        Ok(())
    }

    /// Looks up a user by nick name.
    #[must_use]
    pub fn user(&self, nick_name: &str) -> Option<&User> {
        self.roster.iter().find(|user| user.nick_name == nick_name)
    }

    /// Resolves the logged-in user, failing when nobody is selected or the
    /// selection no longer exists in the roster.
    pub fn require_user(&self, nick_name: Option<&str>) -> Result<&User> {
        let nick_name = nick_name.ok_or(Error::NoUserSelected)?;
        self.user(nick_name).ok_or_else(|| Error::UserNotFound {
            nick_name: nick_name.to_string(),
        })
    }

    /// Users not marked away.
    pub fn active_users(&self) -> impl Iterator<Item = &User> {
        self.roster.iter().filter(|user| !user.away)
    }

    /// Orders paid by `nick_name`, newest first.
    #[must_use]
    pub fn orders_for_user(&self, nick_name: &str) -> Vec<&Order> {
        aggregate::orders_for_user(self.ledger.orders(), nick_name)
    }

    /// What `nick_name` owes.
    #[must_use]
    pub fn debt(&self, nick_name: &str) -> f64 {
        aggregate::debt(self.ledger.orders(), nick_name)
    }

    /// Unit-price revenue per tax category.
    #[must_use]
    pub fn revenue_by_tax_category(&self) -> BTreeMap<String, f64> {
        aggregate::revenue_by_tax_category(self.ledger.orders())
    }

    /// Breakfast sign-ups dated `today`.
    #[must_use]
    pub fn breakfast_roster(&self, today: NaiveDate) -> Vec<BreakfastEntry> {
        aggregate::breakfast_roster(self.ledger.orders(), today)
    }

    /// Dinner sign-ups dated `today` plus volunteers.
    #[must_use]
    pub fn dinner_roster(&self, today: NaiveDate) -> Vec<DinnerEntry> {
        aggregate::dinner_roster(self.ledger.orders(), &self.roster, today)
    }

    /// Dinner head counts for `today`.
    #[must_use]
    pub fn dinner_counts(&self, today: NaiveDate) -> DietCounts {
        DietCounts::from_roster(&self.dinner_roster(today))
    }

    /// Writes an order to the store and the ledger.
    async fn place<S: TableStore>(&mut self, store: &S, order: Order) -> Result<Order> {
        self.ledger.append(store, order.clone()).await?;
        info!(user = %order.user_nick_name, item = %order.item, "Order placed");
        Ok(order)
    }

    /// Orders a catalog item for the logged-in user.
    pub async fn order_item<S: TableStore>(
        &mut self,
        store: &S,
        nick_name: Option<&str>,
        item_name: &str,
        quantity: &str,
    ) -> Result<Order> {
        let user = self.require_user(nick_name)?;
        let order = ordering::catalog_order(
            OrderStamp::now(),
            &user.nick_name,
            &self.catalog,
            item_name,
            quantity,
        )?;
        self.place(store, order).await
    }

    /// Orders an off-catalog item for the logged-in user.
    pub async fn order_custom_item<S: TableStore>(
        &mut self,
        store: &S,
        nick_name: Option<&str>,
        request: &CustomOrderRequest,
    ) -> Result<Order> {
        let user = self.require_user(nick_name)?;
        let order = ordering::custom_order(OrderStamp::now(), &user.nick_name, request)?;
        self.place(store, order).await
    }

    /// Signs a guest up for dinner, refusing once the deadline has passed.
    pub async fn order_dinner<S: TableStore>(
        &mut self,
        store: &S,
        nick_name: Option<&str>,
        form: &DinnerSignup,
        now: NaiveDateTime,
    ) -> Result<Order> {
        let user = self.require_user(nick_name)?;
        if !self.admin.dinner_signup_open(&now) {
            return Err(Error::SignupClosed {
                meal: "dinner".to_string(),
                deadline: self.admin.dinner_signup_deadline.clone(),
            });
        }
        let order = ordering::dinner_signup(OrderStamp::at(now), &user.nick_name, &self.admin, form);
        self.place(store, order).await
    }

    /// Administrator dinner sign-up for an explicitly chosen payer. Not deadline-gated.
    pub async fn order_dinner_late<S: TableStore>(
        &mut self,
        store: &S,
        payer_nick_name: &str,
        full_name: &str,
        diet: &str,
        allergies: &str,
    ) -> Result<Order> {
        let order = ordering::late_dinner_signup(
            OrderStamp::now(),
            payer_nick_name,
            full_name,
            &self.admin,
            diet,
            allergies,
        );
        self.place(store, order).await
    }

    /// Signs a guest up for breakfast, refusing once the deadline has passed.
    pub async fn order_breakfast<S: TableStore>(
        &mut self,
        store: &S,
        nick_name: Option<&str>,
        form: &BreakfastSignup,
        now: NaiveDateTime,
    ) -> Result<Order> {
        let user = self.require_user(nick_name)?;
        if !self.admin.breakfast_signup_open(&now) {
            return Err(Error::SignupClosed {
                meal: "breakfast".to_string(),
                deadline: self.admin.breakfast_signup_deadline.clone(),
            });
        }
        let order = ordering::breakfast_signup(OrderStamp::at(now), user, &self.admin, form);
        self.place(store, order).await
    }
}
