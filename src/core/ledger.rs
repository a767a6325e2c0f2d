//! Order ledger - the in-memory copy of the `orders` sheet.
//!
//! The ledger is only ever replaced wholesale (`reload`) or grown at the front
//! (`append`). Newest orders sit at index 0, mirroring the sheet where new rows are
//! inserted directly under the header.

use crate::{
    errors::Result,
    models::Order,
    store::{Sheet, TableStore},
};
use tracing::{debug, info};

/// All orders currently known to this request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    orders: Vec<Order>,
}

impl Ledger {
    /// Builds a ledger from already parsed orders, newest first.
    #[must_use]
    pub const fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Reads and parses every row of the `orders` sheet.
    pub async fn load<S: TableStore>(store: &S) -> Result<Self> {
        let rows = store.get_all_rows(Sheet::Orders).await?;
        let orders: Vec<Order> = rows.iter().filter_map(Order::from_row).collect();
        debug!(rows = rows.len(), orders = orders.len(), "Loaded ledger");
        Ok(Self { orders })
    }

    /// Replaces the whole ledger with a fresh read of the store.
    ///
    /// On error the current contents are kept.
    pub async fn reload<S: TableStore>(&mut self, store: &S) -> Result<()> {
        *self = Self::load(store).await?;
        Ok(())
    }

    /// Writes `order` to the top of the `orders` sheet, then records it locally.
    ///
    /// If the store write fails the ledger is left untouched.
    pub async fn append<S: TableStore>(&mut self, store: &S, order: Order) -> Result<()> {
        store
            .append_row(Sheet::Orders, order.to_row_values(), true)
            .await?;
        info!(
            order_id = %order.order_id,
            user = %order.user_nick_name,
            item = %order.item,
            total = order.total,
            "Order appended"
        );
        self.orders.insert(0, order);
        Ok(())
    }

    /// Orders newest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// True when there are no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
