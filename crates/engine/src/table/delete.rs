// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use tablekit_catalog::{CatalogStore, TableId};
use tablekit_store::StructuredStore;
use tablekit_type::Result;
use tracing::instrument;

use crate::Engine;

impl<C: CatalogStore, S: StructuredStore> Engine<C, S> {
	/// Removes the table and its columns from the catalog. A bound physical
	/// table is never dropped; it stays behind as an orphan.
	#[instrument(name = "engine::table::delete", level = "info", skip(self), fields(table = %table))]
	pub fn delete_table(&self, table: TableId) -> Result<()> {
		let def = self.table(table)?;
		self.catalog.remove_table(table)?;
		if let Some(physical) = &def.physical_name {
			tracing::debug!(table = %table, physical = %physical, "catalog record removed, physical table kept");
		}
		Ok(())
	}
}
