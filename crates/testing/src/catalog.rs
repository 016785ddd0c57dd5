// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use std::sync::Arc;

use crossbeam_channel::Receiver;
use parking_lot::Mutex;
use tablekit_catalog::{CatalogChange, CatalogStore, ColumnDef, ColumnId, TableDef, TableId};
use tablekit_type::{Result, diagnostic::catalog, return_error};

#[derive(Default)]
struct WriteFaults {
	fail_at: Option<u32>,
	seen: u32,
}

/// Wraps a catalog and fails one definition write on demand.
///
/// Reads, id allocation and subscriptions always pass through; only the six
/// definition writes count towards the armed fault.
#[derive(Clone)]
pub struct FaultyCatalog<C> {
	inner: C,
	faults: Arc<Mutex<WriteFaults>>,
}

impl<C> FaultyCatalog<C> {
	pub fn new(inner: C) -> Self {
		Self {
			inner,
			faults: Arc::new(Mutex::new(WriteFaults::default())),
		}
	}

	/// Arms the wrapper: counting from now, the `nth` definition write fails
	/// with an injected storage error. Writes after the armed one succeed.
	pub fn fail_write(&self, nth: u32) {
		let mut faults = self.faults.lock();
		faults.fail_at = Some(nth);
		faults.seen = 0;
	}

	pub fn inner(&self) -> &C {
		&self.inner
	}

	fn write_gate(&self) -> Result<()> {
		let mut faults = self.faults.lock();
		faults.seen += 1;
		if faults.fail_at == Some(faults.seen) {
			faults.fail_at = None;
			return_error!(catalog::storage("injected write failure"));
		}
		Ok(())
	}
}

impl<C: CatalogStore> CatalogStore for FaultyCatalog<C> {
	fn next_table_id(&self) -> Result<TableId> {
		self.inner.next_table_id()
	}

	fn next_column_id(&self) -> Result<ColumnId> {
		self.inner.next_column_id()
	}

	fn insert_table(&self, def: TableDef) -> Result<()> {
		self.write_gate()?;
		self.inner.insert_table(def)
	}

	fn update_table(&self, def: TableDef) -> Result<()> {
		self.write_gate()?;
		self.inner.update_table(def)
	}

	fn remove_table(&self, table: TableId) -> Result<()> {
		self.write_gate()?;
		self.inner.remove_table(table)
	}

	fn find_table(&self, table: TableId) -> Result<Option<TableDef>> {
		self.inner.find_table(table)
	}

	fn list_tables(&self) -> Result<Vec<TableDef>> {
		self.inner.list_tables()
	}

	fn insert_column(&self, def: ColumnDef) -> Result<()> {
		self.write_gate()?;
		self.inner.insert_column(def)
	}

	fn update_column(&self, def: ColumnDef) -> Result<()> {
		self.write_gate()?;
		self.inner.update_column(def)
	}

	fn remove_column(&self, column: ColumnId) -> Result<()> {
		self.write_gate()?;
		self.inner.remove_column(column)
	}

	fn find_column(&self, column: ColumnId) -> Result<Option<ColumnDef>> {
		self.inner.find_column(column)
	}

	fn list_columns(&self, table: TableId) -> Result<Vec<ColumnDef>> {
		self.inner.list_columns(table)
	}

	fn subscribe(&self, table: TableId) -> Receiver<CatalogChange> {
		self.inner.subscribe(table)
	}
}

#[cfg(test)]
mod tests {
	use tablekit_catalog::MemoryCatalog;

	use super::*;
	use crate::fixture::table_def;

	#[test]
	fn test_armed_write_fails_then_recovers() {
		let catalog = FaultyCatalog::new(MemoryCatalog::new());
		catalog.fail_write(2);

		catalog.insert_table(table_def(1, "first")).unwrap();
		let err = catalog.insert_table(table_def(2, "second")).unwrap_err();
		assert_eq!(err.diagnostic().code, "CAT_006");
		catalog.insert_table(table_def(3, "third")).unwrap();
	}

	#[test]
	fn test_reads_never_count_as_writes() {
		let catalog = FaultyCatalog::new(MemoryCatalog::new());
		catalog.insert_table(table_def(1, "first")).unwrap();
		catalog.fail_write(1);

		catalog.find_table(TableId(1)).unwrap();
		catalog.list_tables().unwrap();
		assert!(catalog.insert_table(table_def(2, "second")).is_err());
	}
}
