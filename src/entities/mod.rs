//! Entity module - `SeaORM` entity definitions backing the tabular store.

pub mod sheet_row;

pub use sheet_row::{Entity as SheetRow, Model as SheetRowModel};
