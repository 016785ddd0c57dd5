// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use serde_json::Value;
use tablekit_catalog::{CatalogStore, ColumnId, TableDef, TableId, TableState};
use tablekit_store::{RowId, StructuredStore};
use tablekit_type::{
	Result,
	diagnostic::{column, deploy},
	error,
	ident::sanitize,
	return_error,
};
use tracing::instrument;

use crate::Engine;

fn deployed_physical(def: &TableDef) -> Result<&str> {
	match (&def.state, &def.physical_name) {
		(TableState::Deployed, Some(physical)) => Ok(physical),
		_ => Err(error!(deploy::not_deployed(&def.name))),
	}
}

impl<C: CatalogStore, S: StructuredStore> Engine<C, S> {
	/// Inserts a blank row into a deployed table: implicit columns filled,
	/// declared defaults applied, everything else null.
	#[instrument(name = "engine::row::insert", level = "debug", skip(self), fields(table = %table))]
	pub fn insert_row(&self, table: TableId) -> Result<RowId> {
		let def = self.table(table)?;
		let physical = deployed_physical(&def)?;
		self.store.insert_empty_row(physical)
	}

	/// Writes one cell. Nulls are rejected for required columns before the
	/// store is touched; the column is addressed by its current sanitized
	/// name.
	#[instrument(name = "engine::row::update_cell", level = "trace", skip(self, value), fields(table = %table, row = %row, column = %column))]
	pub fn update_cell(&self, table: TableId, row: RowId, column: ColumnId, value: Value) -> Result<()> {
		let def = self.table(table)?;
		let physical = deployed_physical(&def)?;
		let column_def = self.column_in_table(table, column)?;

		if column_def.required && value.is_null() {
			return_error!(column::required_null(&column_def.name));
		}
		self.store.update_cell(physical, row, &sanitize(&column_def.name), value)
	}

	#[instrument(name = "engine::row::delete", level = "debug", skip(self), fields(table = %table, row = %row))]
	pub fn delete_row(&self, table: TableId, row: RowId) -> Result<()> {
		let def = self.table(table)?;
		let physical = deployed_physical(&def)?;
		self.store.delete_row(physical, row)
	}
}
