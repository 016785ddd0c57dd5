// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

//! The orchestrator: sequences catalog metadata writes against physical
//! schema changes.
//!
//! An [`Engine`] owns a [`CatalogStore`] and a [`StructuredStore`] and is the
//! only place the two meet. Drafts live purely in the catalog; deploying a
//! table binds its physical name and creates the physical table; later column
//! edits stage metadata first, then execute the diffed ALTER statements, and
//! compensate the staged write when the store rejects them.

use std::{
	sync::Arc,
	time::{SystemTime, UNIX_EPOCH},
};

use tablekit_catalog::{CatalogStore, ColumnDef, ColumnId, TableDef, TableId};
use tablekit_store::StructuredStore;
use tablekit_type::{diagnostic::catalog, error};

mod column;
mod row;
mod table;
mod validate;

pub use column::{ColumnEdit, ColumnToAdd};
pub use table::TableToCreate;
pub use tablekit_type::{Error, Result};

/// Source of `created_at` timestamps, unix epoch milliseconds.
pub type Clock = Arc<dyn Fn() -> u64 + Send + Sync>;

fn system_clock() -> Clock {
	Arc::new(|| {
		SystemTime::now().duration_since(UNIX_EPOCH).map(|elapsed| elapsed.as_millis() as u64).unwrap_or(0)
	})
}

/// Orchestrates table drafts, deployment and schema mutation across a catalog
/// and a structured store.
#[derive(Clone)]
pub struct Engine<C, S> {
	pub(crate) catalog: C,
	pub(crate) store: S,
	pub(crate) clock: Clock,
}

impl<C: CatalogStore, S: StructuredStore> Engine<C, S> {
	pub fn new(catalog: C, store: S) -> Self {
		Self::with_clock(catalog, store, system_clock())
	}

	/// Engine with an injected clock; tests pin timestamps this way.
	pub fn with_clock(catalog: C, store: S, clock: Clock) -> Self {
		Self {
			catalog,
			store,
			clock,
		}
	}

	pub fn catalog(&self) -> &C {
		&self.catalog
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	pub(crate) fn now(&self) -> u64 {
		(self.clock)()
	}

	pub(crate) fn table(&self, table: TableId) -> Result<TableDef> {
		self.catalog.find_table(table)?.ok_or_else(|| error!(catalog::table_not_found(table)))
	}

	/// Resolves a column and checks it belongs to `table`; a column of some
	/// other table is reported as not found, not as a membership error.
	pub(crate) fn column_in_table(&self, table: TableId, column: ColumnId) -> Result<ColumnDef> {
		match self.catalog.find_column(column)? {
			Some(def) if def.table == table => Ok(def),
			_ => Err(error!(catalog::column_not_found(column))),
		}
	}
}
