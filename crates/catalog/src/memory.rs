// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use std::{
	collections::BTreeMap,
	sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	},
};

use crossbeam_channel::Receiver;
use parking_lot::RwLock;
use tablekit_type::{Result, diagnostic::catalog, return_error};

use crate::{
	change::{CatalogChange, Notifier},
	def::{ColumnDef, TableDef},
	id::{ColumnId, TableId},
	store::CatalogStore,
};

/// In-memory catalog backend.
///
/// The default backend for tests and single-process embedding. Cheap to
/// clone; all clones share state.
#[derive(Clone)]
pub struct MemoryCatalog {
	inner: Arc<MemoryCatalogInner>,
}

struct MemoryCatalogInner {
	tables: RwLock<BTreeMap<TableId, TableDef>>,
	columns: RwLock<BTreeMap<ColumnId, ColumnDef>>,
	next_table: AtomicU64,
	next_column: AtomicU64,
	notifier: Notifier,
}

impl MemoryCatalog {
	pub fn new() -> Self {
		Self {
			inner: Arc::new(MemoryCatalogInner {
				tables: RwLock::new(BTreeMap::new()),
				columns: RwLock::new(BTreeMap::new()),
				next_table: AtomicU64::new(1),
				next_column: AtomicU64::new(1),
				notifier: Notifier::new(),
			}),
		}
	}
}

impl Default for MemoryCatalog {
	fn default() -> Self {
		Self::new()
	}
}

impl CatalogStore for MemoryCatalog {
	fn next_table_id(&self) -> Result<TableId> {
		Ok(TableId(self.inner.next_table.fetch_add(1, Ordering::Relaxed)))
	}

	fn next_column_id(&self) -> Result<ColumnId> {
		Ok(ColumnId(self.inner.next_column.fetch_add(1, Ordering::Relaxed)))
	}

	fn insert_table(&self, def: TableDef) -> Result<()> {
		let table = def.id;
		{
			let mut tables = self.inner.tables.write();
			if tables.contains_key(&table) {
				return_error!(catalog::duplicate_table_id(table));
			}
			tables.insert(table, def);
		}
		self.inner.notifier.notify(CatalogChange::TableCreated {
			table,
		});
		Ok(())
	}

	fn update_table(&self, def: TableDef) -> Result<()> {
		let table = def.id;
		{
			let mut tables = self.inner.tables.write();
			if !tables.contains_key(&table) {
				return_error!(catalog::table_not_found(table));
			}
			tables.insert(table, def);
		}
		self.inner.notifier.notify(CatalogChange::TableUpdated {
			table,
		});
		Ok(())
	}

	fn remove_table(&self, table: TableId) -> Result<()> {
		{
			let mut tables = self.inner.tables.write();
			let mut columns = self.inner.columns.write();
			if tables.remove(&table).is_none() {
				return_error!(catalog::table_not_found(table));
			}
			columns.retain(|_, column| column.table != table);
		}
		self.inner.notifier.notify(CatalogChange::TableDeleted {
			table,
		});
		Ok(())
	}

	fn find_table(&self, table: TableId) -> Result<Option<TableDef>> {
		Ok(self.inner.tables.read().get(&table).cloned())
	}

	fn list_tables(&self) -> Result<Vec<TableDef>> {
		Ok(self.inner.tables.read().values().cloned().collect())
	}

	fn insert_column(&self, def: ColumnDef) -> Result<()> {
		let table = def.table;
		let column = def.id;
		{
			let mut columns = self.inner.columns.write();
			if columns.contains_key(&column) {
				return_error!(catalog::duplicate_column_id(column));
			}
			columns.insert(column, def);
		}
		self.inner.notifier.notify(CatalogChange::ColumnCreated {
			table,
			column,
		});
		Ok(())
	}

	fn update_column(&self, def: ColumnDef) -> Result<()> {
		let table = def.table;
		let column = def.id;
		{
			let mut columns = self.inner.columns.write();
			if !columns.contains_key(&column) {
				return_error!(catalog::column_not_found(column));
			}
			columns.insert(column, def);
		}
		self.inner.notifier.notify(CatalogChange::ColumnUpdated {
			table,
			column,
		});
		Ok(())
	}

	fn remove_column(&self, column: ColumnId) -> Result<()> {
		let table = {
			let mut columns = self.inner.columns.write();
			let Some(def) = columns.remove(&column) else {
				return_error!(catalog::column_not_found(column));
			};
			def.table
		};
		self.inner.notifier.notify(CatalogChange::ColumnDeleted {
			table,
			column,
		});
		Ok(())
	}

	fn find_column(&self, column: ColumnId) -> Result<Option<ColumnDef>> {
		Ok(self.inner.columns.read().get(&column).cloned())
	}

	fn list_columns(&self, table: TableId) -> Result<Vec<ColumnDef>> {
		let mut columns: Vec<ColumnDef> =
			self.inner.columns.read().values().filter(|column| column.table == table).cloned().collect();
		columns.sort_by_key(|column| (column.index, column.id));
		Ok(columns)
	}

	fn subscribe(&self, table: TableId) -> Receiver<CatalogChange> {
		self.inner.notifier.subscribe(table)
	}
}
