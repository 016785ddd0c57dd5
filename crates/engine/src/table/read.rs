// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use tablekit_catalog::{CatalogStore, ColumnDef, TableDef, TableId};
use tablekit_store::StructuredStore;
use tablekit_type::Result;
use tracing::instrument;

use crate::Engine;

impl<C: CatalogStore, S: StructuredStore> Engine<C, S> {
	#[instrument(name = "engine::table::get", level = "trace", skip(self), fields(table = %table))]
	pub fn get_table(&self, table: TableId) -> Result<TableDef> {
		self.table(table)
	}

	pub fn list_tables(&self) -> Result<Vec<TableDef>> {
		self.catalog.list_tables()
	}

	/// Columns of the table in ordinal order. Not-found tables are an error,
	/// unlike the catalog trait which reports an empty list.
	pub fn list_columns(&self, table: TableId) -> Result<Vec<ColumnDef>> {
		self.table(table)?;
		self.catalog.list_columns(table)
	}
}
