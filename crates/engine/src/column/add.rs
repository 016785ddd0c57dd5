// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use tablekit_catalog::{CatalogStore, ColumnDef, ColumnIndex, TableId};
use tablekit_ddl::{ChangeOp, synthesize_alter};
use tablekit_store::StructuredStore;
use tablekit_type::{ColumnType, DefaultValue, Result};
use tracing::instrument;

use crate::{Engine, validate::validate_column_name};

/// Input for [`Engine::add_column`].
#[derive(Debug, Clone)]
pub struct ColumnToAdd {
	pub name: String,
	pub ty: ColumnType,
	pub required: bool,
	pub default: Option<DefaultValue>,
}

impl<C: CatalogStore, S: StructuredStore> Engine<C, S> {
	/// Adds a column at the end of the table.
	///
	/// The definition is written to the catalog first; when the table is
	/// deployed an `ADD COLUMN` follows, and a rejected ALTER removes the
	/// staged definition again.
	#[instrument(name = "engine::column::add", level = "debug", skip(self, to_add), fields(table = %table, name = %to_add.name))]
	pub fn add_column(&self, table: TableId, to_add: ColumnToAdd) -> Result<ColumnDef> {
		let table_def = self.table(table)?;
		let existing = self.catalog.list_columns(table)?;
		validate_column_name(&to_add.name, &existing, None)?;

		// Ordinals of dropped columns are never reused.
		let index = existing.iter().map(|column| column.index.0 + 1).max().unwrap_or(0);
		let def = ColumnDef {
			id: self.catalog.next_column_id()?,
			table,
			name: to_add.name,
			ty: to_add.ty,
			required: to_add.required,
			default: to_add.default,
			index: ColumnIndex(index),
			created_at: self.now(),
		};
		self.catalog.insert_column(def.clone())?;

		if let Some(physical) = &table_def.physical_name {
			let statements = synthesize_alter(physical, &[ChangeOp::Added(def.clone())]);
			if let Err(ddl) = self.store.execute_ddl_batch(&statements) {
				return Err(self.compensate(&table_def, ddl, || self.catalog.remove_column(def.id)));
			}
		}
		Ok(def)
	}
}
