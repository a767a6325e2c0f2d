//! `SeaORM` implementation of the tabular store.
//!
//! Rows of all sheets share the `sheet_rows` table. Appends run inside a database
//! transaction so a failure never leaves half a row behind.

use super::{Row, Sheet, TableStore, row_from_values};
use crate::{
    entities::{SheetRow, sheet_row},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::debug;

/// Sheet store backed by a `SeaORM` database connection.
#[derive(Clone, Debug)]
pub struct SheetStore {
    db: DatabaseConnection,
}

impl SheetStore {
    /// Wraps an open connection. Tables must already exist.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the position a new row should take in `sheet`.
    async fn next_position<C: ConnectionTrait>(
        conn: &C,
        sheet: Sheet,
        insert_at_top: bool,
    ) -> Result<i64> {
        let query = SheetRow::find().filter(sheet_row::Column::Sheet.eq(sheet.name()));
        let ordered = if insert_at_top {
            query.order_by_asc(sheet_row::Column::Position)
        } else {
            query.order_by_desc(sheet_row::Column::Position)
        };
        let edge = ordered.one(conn).await?;

        Ok(match edge {
            None => 0,
            Some(row) if insert_at_top => row.position - 1,
            Some(row) => row.position + 1,
        })
    }
}

impl TableStore for SheetStore {
    async fn get_all_rows(&self, sheet: Sheet) -> Result<Vec<Row>> {
        let models = SheetRow::find()
            .filter(sheet_row::Column::Sheet.eq(sheet.name()))
            .order_by_asc(sheet_row::Column::Position)
            .order_by_asc(sheet_row::Column::Id)
            .all(&self.db)
            .await?;

        debug!(%sheet, rows = models.len(), "Read sheet");

        models
            .iter()
            .map(|model| serde_json::from_str::<Row>(&model.data).map_err(Into::into))
            .collect()
    }

    async fn append_row(&self, sheet: Sheet, values: Vec<String>, insert_at_top: bool) -> Result<()> {
        let row = row_from_values(sheet, &values).ok_or_else(|| Error::Store {
            message: format!(
                "Sheet '{sheet}' expects {} values, got {}",
                sheet.headers().len(),
                values.len()
            ),
        })?;
        let data = serde_json::to_string(&row)?;

        let txn = self.db.begin().await?;
        let position = Self::next_position(&txn, sheet, insert_at_top).await?;

        let model = sheet_row::ActiveModel {
            sheet: Set(sheet.name().to_string()),
            position: Set(position),
            data: Set(data),
            ..Default::default()
        };
        model.insert(&txn).await?;
        txn.commit().await?;

        debug!(%sheet, position, "Appended row");
        Ok(())
    }
}
