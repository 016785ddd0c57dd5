// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use tablekit_catalog::{CatalogStore, ColumnId, TableId};
use tablekit_ddl::{diff_removed, synthesize_alter};
use tablekit_store::StructuredStore;
use tablekit_type::Result;
use tracing::instrument;

use crate::Engine;

impl<C: CatalogStore, S: StructuredStore> Engine<C, S> {
	/// Drops a column: catalog first, then `DROP COLUMN IF EXISTS` when the
	/// table is deployed. A rejected drop re-inserts the removed definition.
	#[instrument(name = "engine::column::delete", level = "debug", skip(self), fields(table = %table, column = %column))]
	pub fn delete_column(&self, table: TableId, column: ColumnId) -> Result<()> {
		let table_def = self.table(table)?;
		let original = self.column_in_table(table, column)?;

		self.catalog.remove_column(column)?;

		if let Some(physical) = &table_def.physical_name {
			let statements = synthesize_alter(physical, &diff_removed(&original));
			if let Err(ddl) = self.store.execute_ddl_batch(&statements) {
				return Err(self.compensate(&table_def, ddl, || {
					self.catalog.insert_column(original.clone())
				}));
			}
		}
		Ok(())
	}
}
