// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use crossbeam_channel::Receiver;
use tablekit_type::Result;

use crate::{
	change::CatalogChange,
	def::{ColumnDef, TableDef},
	id::{ColumnId, TableId},
};

/// Keyed CRUD over table and column definitions, id allocation, and
/// table-scoped change subscription.
///
/// Find operations return `Ok(None)` for absent records; update and remove
/// fail with a not-found diagnostic. Multi-record mutations (`remove_table`
/// cascading over columns) are atomic within a backend. Every committed
/// mutation is fanned out to the table's subscribers; notification delivery
/// never blocks or fails the mutation itself.
pub trait CatalogStore: Send + Sync {
	fn next_table_id(&self) -> Result<TableId>;
	fn next_column_id(&self) -> Result<ColumnId>;

	fn insert_table(&self, def: TableDef) -> Result<()>;
	fn update_table(&self, def: TableDef) -> Result<()>;
	/// Removes the table and all of its columns.
	fn remove_table(&self, table: TableId) -> Result<()>;
	fn find_table(&self, table: TableId) -> Result<Option<TableDef>>;
	fn list_tables(&self) -> Result<Vec<TableDef>>;

	fn insert_column(&self, def: ColumnDef) -> Result<()>;
	fn update_column(&self, def: ColumnDef) -> Result<()>;
	fn remove_column(&self, column: ColumnId) -> Result<()>;
	fn find_column(&self, column: ColumnId) -> Result<Option<ColumnDef>>;
	/// Columns of `table` in ordinal order.
	fn list_columns(&self, table: TableId) -> Result<Vec<ColumnDef>>;

	fn subscribe(&self, table: TableId) -> Receiver<CatalogChange>;
}
