//! Sheet row entity - One row of one logical sheet.
//!
//! The store keeps sheets schemaless: each row's cells are serialized into `data` as a
//! JSON object keyed by column name. `position` orders rows within a sheet; inserting at
//! the top takes a position below the current minimum.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sheet row database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sheet_rows")]
pub struct Model {
    /// Unique identifier for the row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Sheet this row belongs to (`"users"`, `"items"`, `"orders"`, `"admin"`)
    pub sheet: String,
    /// Sort key within the sheet, ascending from top to bottom
    pub position: i64,
    /// Cells as a JSON object of column name to string
    #[sea_orm(column_type = "Text")]
    pub data: String,
}

/// `SheetRow` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
