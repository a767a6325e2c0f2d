//! Tabular store - the sheet-like persistence behind Olive Branch.
//!
//! Every logical table (users, items, orders, admin) is a list of rows, each row a
//! mapping from column name to string. The rest of the crate only ever reads whole
//! sheets and appends single rows; nothing is updated or deleted in place.

/// SQLite-backed implementation of [`TableStore`] using `SeaORM`
pub mod sqlite;

pub use sqlite::SheetStore;

use crate::errors::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;

/// One raw row as read from a sheet: column name to cell text.
pub type Row = BTreeMap<String, String>;

/// The four logical tables of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sheet {
    /// Registered users (the roster)
    Users,
    /// Catalog of fixed-price items
    Items,
    /// The order ledger
    Orders,
    /// Single-row administrator configuration
    Admin,
}

impl Sheet {
    /// Sheet name as stored.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Items => "items",
            Self::Orders => "orders",
            Self::Admin => "admin",
        }
    }

    /// Header row of the sheet. Appended values are matched to these columns by position.
    #[must_use]
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Users => &crate::models::user::USER_COLUMNS,
            Self::Items => &crate::models::item::ITEM_COLUMNS,
            Self::Orders => &crate::models::order::ORDER_COLUMNS,
            Self::Admin => &crate::models::admin::ADMIN_COLUMNS,
        }
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Zips a sheet's headers with positional values into a [`Row`].
///
/// Returns `None` when the number of values does not match the header width.
#[must_use]
pub fn row_from_values(sheet: Sheet, values: &[String]) -> Option<Row> {
    let headers = sheet.headers();
    if headers.len() != values.len() {
        return None;
    }
    Some(
        headers
            .iter()
            .zip(values)
            .map(|(column, value)| ((*column).to_string(), value.clone()))
            .collect(),
    )
}

/// Load-all-rows / append-row access to a tabular backing store.
///
/// Implementations must make `append_row` all-or-nothing: a failed call writes no
/// partial row.
pub trait TableStore: Send + Sync {
    /// Returns every row of `sheet`, top to bottom.
    fn get_all_rows(&self, sheet: Sheet) -> impl Future<Output = Result<Vec<Row>>> + Send;

    /// Writes one row. With `insert_at_top` the row lands directly under the header,
    /// otherwise after the last row.
    fn append_row(
        &self,
        sheet: Sheet,
        values: Vec<String>,
        insert_at_top: bool,
    ) -> impl Future<Output = Result<()>> + Send;
}
